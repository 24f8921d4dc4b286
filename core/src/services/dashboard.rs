//! # Dashboards
//!
//! One view per role. Each view takes the caller's [`Session`] and refuses
//! to render for any other role.

use std::sync::Arc;

use anyhow::Context;
use chrono::{DateTime, Utc};
use tracing::warn;

use lifeline_common::error::AuthError;
use lifeline_common::models::blood::BloodGroup;
use lifeline_common::models::donor::Donor;
use lifeline_common::models::facility::{BloodBank, Hospital};
use lifeline_common::ports::clock::Clock;
use lifeline_common::ports::repository::DocumentStore;
use lifeline_common::session::{Role, Session};
use lifeline_common::success;

use crate::inventory::GroupStock;
use crate::matching;

#[derive(Debug, Clone)]
pub struct DonorDashboard {
    pub donor: Donor,
    pub eligible: bool,
    /// First instant a new donation is allowed; `None` when there is no
    /// usable last donation date.
    pub eligible_from: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct BankDashboard {
    pub bank: BloodBank,
    /// One entry per group, graded against the bank's own target.
    pub stock: Vec<GroupStock>,
}

#[derive(Debug, Clone)]
pub struct RecipientDashboard {
    pub blood_group: Option<BloodGroup>,
    pub donors: Vec<Donor>,
}

pub struct DashboardService {
    store: Arc<dyn DocumentStore>,
    clock: Arc<dyn Clock>,
    stock_target_units: u32,
}

impl DashboardService {
    pub fn new(store: Arc<dyn DocumentStore>, clock: Arc<dyn Clock>, stock_target_units: u32) -> Self {
        Self {
            store,
            clock,
            stock_target_units,
        }
    }

    pub async fn donor(&self, session: &Session) -> anyhow::Result<DonorDashboard> {
        session.require(Role::Donor)?;
        let id = session.profile_id()?;
        let donor = self
            .store
            .donor(id)
            .await
            .context("Failed to load donor profile")?
            .ok_or_else(|| AuthError::DanglingProfile(id.to_string()))?;

        let now = self.clock.now();
        let eligible = matching::donor_is_eligible(&donor, now);
        let eligible_from = match donor.last_donation() {
            Ok(last) => last.and_then(matching::eligible_from),
            Err(err) => {
                warn!("Donor '{}' has an unreadable last donation date: {err}", donor.id);
                None
            }
        };

        Ok(DonorDashboard {
            donor,
            eligible,
            eligible_from,
        })
    }

    pub async fn hospital(&self, session: &Session) -> anyhow::Result<Hospital> {
        session.require(Role::Hospital)?;
        let id = session.profile_id()?;
        let hospital = self
            .store
            .hospital(id)
            .await
            .context("Failed to load hospital profile")?
            .ok_or_else(|| AuthError::DanglingProfile(id.to_string()))?;
        Ok(hospital)
    }

    pub async fn blood_bank(&self, session: &Session) -> anyhow::Result<BankDashboard> {
        session.require(Role::BloodBank)?;
        let bank = self.load_bank(session).await?;
        let stock = BloodGroup::ALL
            .into_iter()
            .map(|group| GroupStock::new(group, u64::from(bank.units_of(group)), self.stock_target_units))
            .collect();
        Ok(BankDashboard { bank, stock })
    }

    /// Sets the bank's units of `group` and returns the refreshed view.
    pub async fn update_stock(
        &self,
        session: &Session,
        group: BloodGroup,
        units: u32,
    ) -> anyhow::Result<BankDashboard> {
        session.require(Role::BloodBank)?;
        let id = session.profile_id()?;
        self.store
            .set_stock(id, group, units)
            .await
            .with_context(|| format!("Failed to update {group} stock"))?;
        success!("{} stock set to {} units", group, units);
        self.blood_bank(session).await
    }

    /// Donors of the recipient's group, whatever their eligibility.
    pub async fn recipient(&self, session: &Session) -> anyhow::Result<RecipientDashboard> {
        session.require(Role::Recipient)?;
        let Some(group) = session.blood_group else {
            return Ok(RecipientDashboard {
                blood_group: None,
                donors: Vec::new(),
            });
        };

        let donors = self
            .store
            .find_by_blood_group(group)
            .await
            .context("Failed to fetch donors")?;
        Ok(RecipientDashboard {
            blood_group: Some(group),
            donors,
        })
    }

    async fn load_bank(&self, session: &Session) -> anyhow::Result<BloodBank> {
        let id = session.profile_id()?;
        let bank = self
            .store
            .bank(id)
            .await
            .context("Failed to load blood bank profile")?
            .ok_or_else(|| AuthError::DanglingProfile(id.to_string()))?;
        Ok(bank)
    }
}
