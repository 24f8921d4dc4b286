//! # Blood Bank Directory
//!
//! A browsable list of blood banks: a fixed set of well known banks merged
//! with every bank registered in the store. Searching is a case-insensitive
//! substring match on name or address plus an exact location choice.

use lifeline_common::models::facility::BloodBank;

mod seed;

/// Location choice that disables location filtering.
pub const ALL_LOCATIONS: &str = "All";

struct SeedEntry {
    id: &'static str,
    name: &'static str,
    location: &'static str,
    address: &'static str,
    contact: &'static str,
    category: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub id: String,
    pub name: String,
    pub location: String,
    pub address: String,
    pub contact: String,
    pub category: String,
}

impl From<&SeedEntry> for DirectoryEntry {
    fn from(seed: &SeedEntry) -> Self {
        Self {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            location: seed.location.to_string(),
            address: seed.address.to_string(),
            contact: seed.contact.to_string(),
            category: seed.category.to_string(),
        }
    }
}

impl From<&BloodBank> for DirectoryEntry {
    fn from(bank: &BloodBank) -> Self {
        Self {
            id: bank.id.clone(),
            name: bank.blood_bank_name.clone(),
            location: bank.directory_location().to_string(),
            address: bank.address.clone(),
            contact: bank.contact_number.clone(),
            category: bank.category_or_default().to_string(),
        }
    }
}

impl DirectoryEntry {
    fn matches_term(&self, lowered_term: &str) -> bool {
        self.name.to_lowercase().contains(lowered_term)
            || self.address.to_lowercase().contains(lowered_term)
    }
}

#[derive(Debug, Clone)]
pub struct Directory {
    entries: Vec<DirectoryEntry>,
}

impl Directory {
    /// Seed banks first, then `registered` in store order.
    pub fn new(registered: &[BloodBank]) -> Self {
        let entries = seed::SEED_BANKS
            .iter()
            .map(DirectoryEntry::from)
            .chain(registered.iter().map(DirectoryEntry::from))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    /// `"All"` followed by every distinct non-empty location, first seen first.
    pub fn locations(&self) -> Vec<&str> {
        let mut locations = vec![ALL_LOCATIONS];
        for entry in &self.entries {
            let location = entry.location.as_str();
            if !location.is_empty() && !locations.contains(&location) {
                locations.push(location);
            }
        }
        locations
    }

    /// Entries whose name or address contains `term` (ignoring case) and whose
    /// location equals `location`, unless `location` is [`ALL_LOCATIONS`].
    pub fn search(&self, term: &str, location: &str) -> Vec<&DirectoryEntry> {
        let lowered = term.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.matches_term(&lowered))
            .filter(|entry| location == ALL_LOCATIONS || entry.location == location)
            .collect()
    }
}
