//! # Blood Search Service
//!
//! Implements the "Request Blood" use case: eligible donors of the requested
//! group near the patient, plus the blood banks in that area and how much of
//! the group each one holds.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use lifeline_common::models::blood::BloodGroup;
use lifeline_common::models::donor::Donor;
use lifeline_common::models::facility::BloodBank;
use lifeline_common::ports::clock::Clock;
use lifeline_common::ports::notifier::Notifier;
use lifeline_common::ports::repository::DocumentStore;

use crate::matching::{self, LocationFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Urgency {
    #[default]
    Normal,
    Urgent,
    Critical,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Urgency::Normal => "Normal",
            Urgency::Urgent => "Urgent",
            Urgency::Critical => "Critical",
        })
    }
}

impl FromStr for Urgency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(Urgency::Normal),
            "urgent" => Ok(Urgency::Urgent),
            "critical" => Ok(Urgency::Critical),
            _ => Err(format!("invalid urgency: {s} (expected normal, urgent or critical)")),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BloodRequest {
    pub patient_name: Option<String>,
    /// Label as entered, compared exactly. `None`, an empty label or an
    /// unknown label finds no donors; banks are still listed.
    pub blood_group: Option<String>,
    pub district: Option<String>,
    pub nearest_town: Option<String>,
    pub urgency: Urgency,
}

impl BloodRequest {
    /// The requested group, if the label names one.
    pub fn group(&self) -> Option<BloodGroup> {
        self.blood_group.as_deref().and_then(|label| label.parse().ok())
    }
}

#[derive(Debug, Clone)]
pub struct BankMatch {
    pub bank: BloodBank,
    /// Units of the requested group, `None` when no group was requested.
    pub requested_units: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub donors: Vec<Donor>,
    pub banks: Vec<BankMatch>,
    pub notified: usize,
}

pub struct SearchService {
    store: Arc<dyn DocumentStore>,
    clock: Arc<dyn Clock>,
    notifier: Arc<dyn Notifier>,
}

impl SearchService {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        clock: Arc<dyn Clock>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            store,
            clock,
            notifier,
        }
    }

    /// Runs one search. Any store failure aborts the whole search.
    ///
    /// With `notify`, every matched donor is sent a notification; a failed
    /// notification is logged and does not fail the search.
    pub async fn search(&self, request: &BloodRequest, notify: bool) -> anyhow::Result<SearchOutcome> {
        let donors = self.matching_donors(request).await?;
        let banks = self.nearby_banks(request).await?;

        let notified = if notify {
            self.notify_all(&donors).await
        } else {
            0
        };

        info!(
            "{} request matched {} donors and {} blood banks",
            request.urgency,
            donors.len(),
            banks.len()
        );

        Ok(SearchOutcome {
            donors,
            banks,
            notified,
        })
    }

    async fn matching_donors(&self, request: &BloodRequest) -> anyhow::Result<Vec<Donor>> {
        let all = self
            .store
            .all_donors()
            .await
            .context("Failed to fetch donors")?;

        let Some(label) = request.blood_group.as_deref() else {
            return Ok(Vec::new());
        };

        let eligible = matching::find_matching_donors_by_label(label, all, self.clock.now());
        let location = LocationFilter::new(
            request.district.as_deref(),
            request.nearest_town.as_deref(),
        );
        Ok(location.apply(eligible))
    }

    async fn nearby_banks(&self, request: &BloodRequest) -> anyhow::Result<Vec<BankMatch>> {
        let district = request.district.as_deref().filter(|d| !d.is_empty());
        let town = request.nearest_town.as_deref().filter(|t| !t.is_empty());

        // Town narrows only within a district.
        let banks = match district {
            Some(district) => self.store.banks_in(district, town).await,
            None => self.store.all_banks().await,
        }
        .context("Failed to fetch blood banks")?;

        let group = request.group();
        Ok(banks
            .into_iter()
            .map(|bank| BankMatch {
                requested_units: group.map(|g| bank.units_of(g)),
                bank,
            })
            .collect())
    }

    async fn notify_all(&self, donors: &[Donor]) -> usize {
        let mut sent = 0;
        for donor in donors {
            match self.notifier.notify(donor).await {
                Ok(true) => sent += 1,
                Ok(false) => {}
                Err(err) => warn!("Failed to notify donor '{}': {err}", donor.id),
            }
        }
        sent
    }
}
