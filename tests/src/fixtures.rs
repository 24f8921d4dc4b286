#![cfg(test)]
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use lifeline_common::config::Config;
use lifeline_common::models::donor::Donor;
use lifeline_common::ports::notifier::Notifier;
use lifeline_core::adapters::clock::FixedClock;
use lifeline_core::adapters::json_store::JsonStore;
use lifeline_core::services::Services;
use lifeline_core::services::registration::DonorForm;

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

/// Remembers who it was asked to notify.
#[derive(Default)]
pub struct RecordingNotifier {
    pub notified: Mutex<Vec<String>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, donor: &Donor) -> anyhow::Result<bool> {
        self.notified.lock().unwrap().push(donor.id.clone());
        Ok(true)
    }
}

pub struct World {
    pub store: Arc<JsonStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub services: Services,
    pub config: Config,
}

pub fn world() -> World {
    let store = Arc::new(JsonStore::in_memory());
    let notifier = Arc::new(RecordingNotifier::default());
    let config = Config::default();
    let services = Services::new(
        store.clone(),
        Arc::new(FixedClock(now())),
        notifier.clone(),
        &config,
    );
    World {
        store,
        notifier,
        services,
        config,
    }
}

pub fn donor_form(email: &str) -> DonorForm {
    DonorForm {
        full_name: "Ravi Kumar".into(),
        blood_group: lifeline_common::models::blood::BloodGroup::APositive,
        last_donation_date: None,
        phone: "9876543210".into(),
        email: email.into(),
        password: "donate123".into(),
        district: "Guntur".into(),
        nearest_town: "Tenali".into(),
        village: None,
        distance_from_town: None,
    }
}
