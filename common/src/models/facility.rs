//! # Facility Models
//!
//! Hospitals and blood banks. Both are plain records with no derived state
//! except a blood bank's per-group stock.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::blood::BloodGroup;

/// Category shown when a bank record carries none.
pub const DEFAULT_BANK_CATEGORY: &str = "Blood Bank";

/// Categories offered by the registration form.
pub const BANK_CATEGORIES: [&str; 6] = [
    "Hospital",
    "Voluntary",
    "Red Cross",
    "Charity",
    "Private",
    "Government",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    #[serde(default)]
    pub id: String,
    pub hospital_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub contact_number: String,
    /// Health Facility Registry identifier.
    #[serde(default)]
    pub hfr_id: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub town: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodBank {
    #[serde(default)]
    pub id: String,
    pub blood_bank_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub town: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testing_facilities: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_facilities: Option<String>,
    /// Free text, e.g. "500 units".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_capacity: Option<String>,
    /// Units on hand per group. Groups without an entry hold zero.
    #[serde(default)]
    pub inventory: BTreeMap<BloodGroup, u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl BloodBank {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            blood_bank_name: name.into(),
            category: None,
            email: String::new(),
            contact_number: String::new(),
            address: String::new(),
            district: None,
            town: None,
            testing_facilities: None,
            processing_facilities: None,
            storage_capacity: None,
            inventory: BTreeMap::new(),
            created_at: None,
        }
    }

    pub fn with_location(mut self, district: impl Into<String>, town: impl Into<String>) -> Self {
        self.district = Some(district.into());
        self.town = Some(town.into());
        self
    }

    pub fn with_stock(mut self, group: BloodGroup, units: u32) -> Self {
        self.inventory.insert(group, units);
        self
    }

    pub fn units_of(&self, group: BloodGroup) -> u32 {
        self.inventory.get(&group).copied().unwrap_or(0)
    }

    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_BANK_CATEGORY)
    }

    /// Where the directory lists this bank: town, then district, then "Unknown".
    pub fn directory_location(&self) -> &str {
        [self.town.as_deref(), self.district.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or("Unknown")
    }
}
