//! # Authentication Service
//!
//! Turns credentials into a [`Session`]. The configured admin account is
//! checked first and never touches the store; every other login resolves a
//! `login_details` record and loads the profile it points at.

use std::sync::Arc;

use anyhow::Context;
use tracing::{debug, info};

use lifeline_common::error::{AuthError, ValidationError};
use lifeline_common::models::account::{LoginRecord, UserType};
use lifeline_common::models::blood::BloodGroup;
use lifeline_common::models::recipient::RecipientAccess;
use lifeline_common::ports::clock::Clock;
use lifeline_common::ports::repository::DocumentStore;
use lifeline_common::session::{Role, Session};

use crate::credentials;

/// Credentials that open the admin dashboard.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct RecipientForm {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub blood_group: Option<BloodGroup>,
}

pub struct AuthService {
    store: Arc<dyn DocumentStore>,
    clock: Arc<dyn Clock>,
    admin: AdminCredentials,
}

impl AuthService {
    pub fn new(store: Arc<dyn DocumentStore>, clock: Arc<dyn Clock>, admin: AdminCredentials) -> Self {
        Self { store, clock, admin }
    }

    pub async fn login(&self, email: &str, password: &str) -> anyhow::Result<Session> {
        let email = email.trim();
        if email == self.admin.email && password == self.admin.password {
            info!("Admin signed in");
            return Ok(Session::admin(email, self.clock.now()));
        }

        let record = self
            .store
            .login_by_email(email)
            .await
            .context("Failed to look up login details")?
            .filter(|record| credentials::verify_password(&record.salt, password, &record.password_hash))
            .ok_or(AuthError::InvalidCredentials)?;

        let session = self.open_profile(&record).await?;
        info!("Signed in {} '{}'", session.role, session.display_name);
        Ok(session)
    }

    /// Records a recipient's visit and opens a recipient session.
    pub async fn recipient_access(&self, form: RecipientForm) -> anyhow::Result<Session> {
        for (field, value) in [("full name", &form.full_name), ("phone", &form.phone), ("email", &form.email)] {
            if value.trim().is_empty() {
                return Err(ValidationError::new(field, "is required").into());
            }
        }

        let now = self.clock.now();
        let access = RecipientAccess {
            id: String::new(),
            full_name: form.full_name.trim().to_string(),
            phone: form.phone.trim().to_string(),
            email: form.email.trim().to_string(),
            blood_group: form.blood_group,
            login_time: now,
        };
        let id = self
            .store
            .insert_recipient(access)
            .await
            .context("Failed to record recipient access")?;

        Ok(Session {
            role: Role::Recipient,
            profile_id: Some(id),
            display_name: form.full_name.trim().to_string(),
            email: form.email.trim().to_string(),
            blood_group: form.blood_group,
            started_at: now,
        })
    }

    pub fn logout(&self, session: Session) {
        let role = session.role;
        let lasted = session.end(self.clock.now());
        debug!("Signed out {role} after {}s", lasted.num_seconds());
    }

    async fn open_profile(&self, record: &LoginRecord) -> anyhow::Result<Session> {
        let id = record.profile_id.as_str();
        let dangling = || AuthError::DanglingProfile(id.to_string());

        let (display_name, blood_group) = match record.user_type {
            UserType::Donor => {
                let donor = self.store.donor(id).await?.ok_or_else(dangling)?;
                (donor.full_name, donor.blood_group.known())
            }
            UserType::Hospital => {
                let hospital = self.store.hospital(id).await?.ok_or_else(dangling)?;
                (hospital.hospital_name, None)
            }
            UserType::BloodBank => {
                let bank = self.store.bank(id).await?.ok_or_else(dangling)?;
                (bank.blood_bank_name, None)
            }
        };

        Ok(Session {
            role: Role::from(record.user_type),
            profile_id: Some(record.profile_id.clone()),
            display_name,
            email: record.email.clone(),
            blood_group,
            started_at: self.clock.now(),
        })
    }
}
