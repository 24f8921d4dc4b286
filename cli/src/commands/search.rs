use std::time::Instant;

use colored::*;

use lifeline_common::config::Config;
use lifeline_common::models::blood::BloodGroup;
use lifeline_common::success;
use lifeline_core::services::Services;
use lifeline_core::services::search::{BankMatch, BloodRequest, SearchOutcome};

use crate::commands::SearchArgs;
use crate::mprint;
use crate::terminal::print::Detail;
use crate::terminal::{colors, format, print, spinner};

pub async fn search(services: &Services, args: SearchArgs, cfg: &Config) -> anyhow::Result<()> {
    match args.group.as_deref() {
        None => {
            lifeline_common::hint!("Pass --group to look for donors; only blood banks will be listed")
        }
        Some(label) if label.parse::<BloodGroup>().is_err() => {
            lifeline_common::hint!("'{}' is not a blood group label such as A+ or O-; no donor can match", label)
        }
        Some(_) => {}
    }

    let request = BloodRequest {
        patient_name: args.patient,
        blood_group: args.group,
        district: args.district,
        nearest_town: args.town,
        urgency: args.urgency,
    };

    let start_time = Instant::now();
    let outcome = spinner::run(
        "Searching donors and blood banks...",
        services.search.search(&request, args.notify),
    )
    .await?;

    search_ends(&request, &outcome, start_time, cfg);
    Ok(())
}

fn search_ends(request: &BloodRequest, outcome: &SearchOutcome, start_time: Instant, cfg: &Config) {
    if outcome.donors.is_empty() && outcome.banks.is_empty() {
        print::header("nothing nearby", cfg.quiet);
        print::no_results();
        return;
    }

    let title = match &request.patient_name {
        Some(name) => format!("donors for {name}"),
        None => "eligible donors".to_string(),
    };
    print::header(&title, cfg.quiet);
    for (idx, donor) in outcome.donors.iter().enumerate() {
        print::tree_head(idx, &donor.full_name);
        if cfg.quiet < 2 {
            print::as_tree_one_level(format::donor_to_details(donor));
        }
    }

    if !outcome.banks.is_empty() {
        mprint!();
        print::header("blood banks in the area", cfg.quiet);
        for (idx, found) in outcome.banks.iter().enumerate() {
            print::tree_head(idx, &found.bank.blood_bank_name);
            if cfg.quiet < 2 {
                print::as_tree_one_level(bank_details(found));
            }
        }
    }

    let donors: ColoredString = format!("{} eligible donors", outcome.donors.len()).bold().green();
    let banks: ColoredString = format!("{} blood banks", outcome.banks.len()).bold().yellow();
    let elapsed: ColoredString = format!("{:.2}s", start_time.elapsed().as_secs_f64()).bold();
    let summary = format!("{} request: {donors} and {banks} in {elapsed}", request.urgency)
        .color(colors::TEXT_DEFAULT)
        .to_string();

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&summary);
        }
        _ => success!("{}", summary),
    }

    if outcome.notified > 0 {
        success!("Notified {} donors", outcome.notified);
    }
}

fn bank_details(found: &BankMatch) -> Vec<Detail> {
    let mut details = format::bank_to_details(&found.bank);
    if let Some(units) = found.requested_units {
        let value = match units {
            0 => "out of stock".red().bold(),
            n => format!("{n} units").green().bold(),
        };
        details.insert(0, ("Available".to_string(), value));
    }
    details
}
