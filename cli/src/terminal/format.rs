use chrono::{DateTime, Utc};
use colored::*;

use lifeline_common::models::blood::{BloodGroup, RecordedGroup};
use lifeline_common::models::donor::Donor;
use lifeline_common::models::facility::{BloodBank, Hospital};
use lifeline_core::directory::DirectoryEntry;
use lifeline_core::inventory::{GroupStock, StockLevel};

use crate::terminal::colors;
use crate::terminal::print::Detail;

const BAR_WIDTH: usize = 20;

pub fn blood_group(group: BloodGroup) -> ColoredString {
    let color = match group {
        BloodGroup::APositive | BloodGroup::BPositive | BloodGroup::AbPositive | BloodGroup::OPositive => {
            colors::BLOOD_POSITIVE
        }
        _ => colors::BLOOD_NEGATIVE,
    };
    group.label().color(color).bold()
}

/// A stored donor's group; unreadable text shows in the muted color.
pub fn recorded_group(group: &RecordedGroup) -> ColoredString {
    match group {
        RecordedGroup::Known(group) => blood_group(*group),
        RecordedGroup::Unrecognised(raw) if raw.trim().is_empty() => "?".color(colors::MUTED),
        RecordedGroup::Unrecognised(raw) => raw.as_str().color(colors::MUTED),
    }
}

pub fn stock_level(level: StockLevel) -> ColoredString {
    let text = level.to_string();
    match level {
        StockLevel::CriticalLow => text.color(colors::STOCK_CRITICAL).bold(),
        StockLevel::Stable => text.color(colors::STOCK_STABLE),
        StockLevel::WellStocked => text.color(colors::STOCK_WELL),
    }
}

/// `[██████░░░░]  60% Stable`
pub fn stock_bar(stock: &GroupStock) -> ColoredString {
    let filled = usize::from(stock.percentage) * BAR_WIDTH / 100;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));
    format!(
        "{:>4} units {} {:>3}% {}",
        stock.units,
        bar.color(colors::SEPARATOR),
        stock.percentage,
        stock_level(stock.level)
    )
    .normal()
}

pub fn date(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d").to_string()
}

fn or_dash(value: Option<&str>) -> ColoredString {
    match value.filter(|v| !v.trim().is_empty()) {
        Some(value) => value.normal(),
        None => "-".color(colors::MUTED),
    }
}

pub fn donor_to_details(donor: &Donor) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![
        ("Group".to_string(), recorded_group(&donor.blood_group)),
        ("Phone".to_string(), or_dash(Some(donor.phone.as_str()))),
        ("Email".to_string(), or_dash(Some(donor.email.as_str()))),
    ];

    let location = match (donor.nearest_town.as_deref(), donor.district.as_deref()) {
        (Some(town), Some(district)) => Some(format!("{town}, {district}")),
        (Some(place), None) | (None, Some(place)) => Some(place.to_string()),
        (None, None) => None,
    };
    details.push(("Location".to_string(), or_dash(location.as_deref())));

    if let Some(village) = donor.village.as_deref() {
        details.push(("Village".to_string(), village.normal()));
    }
    details.push((
        "Last gift".to_string(),
        or_dash(donor.last_donation_date.as_deref()),
    ));
    details
}

pub fn hospital_to_details(hospital: &Hospital) -> Vec<Detail> {
    vec![
        ("HFR id".to_string(), or_dash(Some(hospital.hfr_id.as_str()))),
        ("Contact".to_string(), or_dash(Some(hospital.contact_number.as_str()))),
        ("Email".to_string(), or_dash(Some(hospital.email.as_str()))),
        (
            "Location".to_string(),
            format!("{}, {}", hospital.town, hospital.district).normal(),
        ),
    ]
}

pub fn bank_to_details(bank: &BloodBank) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![
        ("Category".to_string(), bank.category_or_default().color(colors::ACCENT)),
        ("Address".to_string(), or_dash(Some(bank.address.as_str()))),
        ("Contact".to_string(), or_dash(Some(bank.contact_number.as_str()))),
        ("Location".to_string(), bank.directory_location().normal()),
    ];
    if let Some(testing) = bank.testing_facilities.as_deref() {
        details.push(("Testing".to_string(), testing.normal()));
    }
    if let Some(storage) = bank.storage_capacity.as_deref() {
        details.push(("Storage".to_string(), storage.normal()));
    }
    details
}

pub fn directory_to_details(entry: &DirectoryEntry) -> Vec<Detail> {
    vec![
        ("Category".to_string(), entry.category.color(colors::ACCENT)),
        ("Location".to_string(), entry.location.normal()),
        ("Address".to_string(), or_dash(Some(entry.address.as_str()))),
        ("Contact".to_string(), or_dash(Some(entry.contact.as_str()))),
    ]
}
