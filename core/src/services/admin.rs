//! # Admin Service
//!
//! Counts, the donor roster and camp photo management. Every call requires
//! an admin [`Session`].

use std::sync::Arc;

use anyhow::Context;

use lifeline_common::error::ValidationError;
use lifeline_common::models::donor::Donor;
use lifeline_common::models::photo::CampPhoto;
use lifeline_common::ports::clock::Clock;
use lifeline_common::ports::repository::DocumentStore;
use lifeline_common::session::{Role, Session};
use lifeline_common::success;

pub const ADMIN_PHOTO_LIMIT: usize = 20;
pub const PHOTO_UPLOADER: &str = "admin";

/// Shown in the roster for donors who never gave blood.
pub const NEVER_DONATED: &str = "Never";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminStats {
    pub donors: usize,
    pub hospitals: usize,
    pub blood_banks: usize,
    /// Recipient dashboard visits.
    pub requests: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub donor: Donor,
    pub last_donation: String,
}

impl From<Donor> for RosterEntry {
    fn from(donor: Donor) -> Self {
        let last_donation = donor
            .last_donation_date
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(NEVER_DONATED)
            .to_string();
        Self {
            donor,
            last_donation,
        }
    }
}

pub struct AdminService {
    store: Arc<dyn DocumentStore>,
    clock: Arc<dyn Clock>,
}

impl AdminService {
    pub fn new(store: Arc<dyn DocumentStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn stats(&self, session: &Session) -> anyhow::Result<AdminStats> {
        session.require(Role::Admin)?;
        Ok(AdminStats {
            donors: self.store.all_donors().await.context("Failed to count donors")?.len(),
            hospitals: self
                .store
                .all_hospitals()
                .await
                .context("Failed to count hospitals")?
                .len(),
            blood_banks: self.store.all_banks().await.context("Failed to count blood banks")?.len(),
            requests: self
                .store
                .recipient_count()
                .await
                .context("Failed to count recipient requests")?,
        })
    }

    pub async fn donors(&self, session: &Session) -> anyhow::Result<Vec<RosterEntry>> {
        session.require(Role::Admin)?;
        let donors = self.store.all_donors().await.context("Failed to fetch donors")?;
        Ok(donors.into_iter().map(RosterEntry::from).collect())
    }

    pub async fn photos(&self, session: &Session) -> anyhow::Result<Vec<CampPhoto>> {
        session.require(Role::Admin)?;
        self.store
            .latest_photos(ADMIN_PHOTO_LIMIT)
            .await
            .context("Failed to fetch camp photos")
    }

    pub async fn add_photo(&self, session: &Session, url: &str, caption: &str) -> anyhow::Result<String> {
        session.require(Role::Admin)?;
        if url.trim().is_empty() {
            return Err(ValidationError::new("url", "is required").into());
        }

        let photo = CampPhoto {
            id: String::new(),
            url: url.trim().to_string(),
            caption: caption.trim().to_string(),
            uploaded_by: PHOTO_UPLOADER.to_string(),
            created_at: self.clock.now(),
        };
        let id = self
            .store
            .insert_photo(photo)
            .await
            .context("Failed to save camp photo")?;
        success!("Added camp photo '{}'", id);
        Ok(id)
    }

    pub async fn delete_photo(&self, session: &Session, id: &str) -> anyhow::Result<()> {
        session.require(Role::Admin)?;
        self.store
            .delete_photo(id)
            .await
            .with_context(|| format!("Failed to delete camp photo '{id}'"))?;
        success!("Deleted camp photo '{}'", id);
        Ok(())
    }
}
