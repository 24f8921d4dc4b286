//! # Registration Service
//!
//! Validates sign-up forms and writes the profile plus its login record.
//!
//! Every profile type gets a `login_details` entry pointing at it, so the
//! same login flow serves donors, hospitals and blood banks. The profile is
//! written first; if its login record then fails to save, the profile is
//! removed again.

use std::sync::Arc;

use anyhow::Context;
use tracing::warn;

use lifeline_common::error::{AuthError, ValidationError};
use lifeline_common::location;
use lifeline_common::models::account::{LoginRecord, UserType};
use lifeline_common::models::blood::BloodGroup;
use lifeline_common::models::donor::{Donor, parse_donation_date};
use lifeline_common::models::facility::{BloodBank, Hospital};
use lifeline_common::ports::clock::Clock;
use lifeline_common::ports::repository::DocumentStore;
use lifeline_common::success;

use crate::credentials;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone)]
pub struct DonorForm {
    pub full_name: String,
    pub blood_group: BloodGroup,
    /// `YYYY-MM-DD` or RFC 3339; must not be in the future.
    pub last_donation_date: Option<String>,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub district: String,
    pub nearest_town: String,
    pub village: Option<String>,
    pub distance_from_town: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct HospitalForm {
    pub hospital_name: String,
    pub email: String,
    pub password: String,
    pub contact_number: String,
    pub hfr_id: String,
    pub district: String,
    pub town: String,
}

#[derive(Debug, Clone)]
pub struct BloodBankForm {
    pub blood_bank_name: String,
    pub category: String,
    pub email: String,
    pub password: String,
    pub contact_number: String,
    pub address: String,
    pub district: String,
    pub town: String,
    pub testing_facilities: Option<String>,
    pub processing_facilities: Option<String>,
    pub storage_capacity: Option<String>,
}

/// Ids written by a successful registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registered {
    pub profile_id: String,
    pub login_id: String,
}

pub struct RegistrationService {
    store: Arc<dyn DocumentStore>,
    clock: Arc<dyn Clock>,
}

impl RegistrationService {
    pub fn new(store: Arc<dyn DocumentStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn register_donor(&self, form: DonorForm) -> anyhow::Result<Registered> {
        let now = self.clock.now();
        validate_donor(&form, now)?;
        self.ensure_email_free(&form.email).await?;

        let donor = Donor {
            id: String::new(),
            full_name: form.full_name.trim().to_string(),
            blood_group: form.blood_group.into(),
            last_donation_date: non_empty(form.last_donation_date),
            phone: form.phone.trim().to_string(),
            email: form.email.trim().to_string(),
            district: Some(form.district),
            nearest_town: Some(form.nearest_town),
            village: non_empty(form.village),
            distance_from_town: form.distance_from_town,
            created_at: Some(now),
        };
        let profile_id = self
            .store
            .insert_donor(donor)
            .await
            .context("Failed to save donor")?;

        let login_id = self
            .create_login(&form.email, &form.password, UserType::Donor, &profile_id)
            .await?;
        success!("Registered donor '{}'", form.full_name.trim());
        Ok(Registered {
            profile_id,
            login_id,
        })
    }

    pub async fn register_hospital(&self, form: HospitalForm) -> anyhow::Result<Registered> {
        validate_hospital(&form)?;
        self.ensure_email_free(&form.email).await?;

        let hospital = Hospital {
            id: String::new(),
            hospital_name: form.hospital_name.trim().to_string(),
            email: form.email.trim().to_string(),
            contact_number: form.contact_number.trim().to_string(),
            hfr_id: form.hfr_id.trim().to_string(),
            district: form.district,
            town: form.town,
            created_at: Some(self.clock.now()),
        };
        let profile_id = self
            .store
            .insert_hospital(hospital)
            .await
            .context("Failed to save hospital")?;

        let login_id = self
            .create_login(&form.email, &form.password, UserType::Hospital, &profile_id)
            .await?;
        success!("Registered hospital '{}'", form.hospital_name.trim());
        Ok(Registered {
            profile_id,
            login_id,
        })
    }

    pub async fn register_bank(&self, form: BloodBankForm) -> anyhow::Result<Registered> {
        validate_bank(&form)?;
        self.ensure_email_free(&form.email).await?;

        let mut bank = BloodBank::new(form.blood_bank_name.trim())
            .with_location(form.district, form.town);
        bank.category = Some(form.category);
        bank.email = form.email.trim().to_string();
        bank.contact_number = form.contact_number.trim().to_string();
        bank.address = form.address.trim().to_string();
        bank.testing_facilities = non_empty(form.testing_facilities);
        bank.processing_facilities = non_empty(form.processing_facilities);
        bank.storage_capacity = non_empty(form.storage_capacity);
        bank.created_at = Some(self.clock.now());

        let profile_id = self
            .store
            .insert_bank(bank)
            .await
            .context("Failed to save blood bank")?;

        let login_id = self
            .create_login(&form.email, &form.password, UserType::BloodBank, &profile_id)
            .await?;
        success!("Registered blood bank '{}'", form.blood_bank_name.trim());
        Ok(Registered {
            profile_id,
            login_id,
        })
    }

    async fn ensure_email_free(&self, email: &str) -> anyhow::Result<()> {
        let existing = self
            .store
            .login_by_email(email.trim())
            .await
            .context("Failed to look up existing accounts")?;
        if existing.is_some() {
            return Err(AuthError::EmailTaken(email.trim().to_string()).into());
        }
        Ok(())
    }

    async fn create_login(
        &self,
        email: &str,
        password: &str,
        user_type: UserType,
        profile_id: &str,
    ) -> anyhow::Result<String> {
        let salt = credentials::new_salt();
        let record = LoginRecord {
            id: String::new(),
            email: email.trim().to_string(),
            password_hash: credentials::hash_password(&salt, password),
            salt,
            user_type,
            profile_id: profile_id.to_string(),
            created_at: Some(self.clock.now()),
        };
        match self.store.insert_login(record).await {
            Ok(login_id) => Ok(login_id),
            Err(err) => {
                self.discard_profile(user_type, profile_id).await;
                Err(err).context("Failed to save login details")
            }
        }
    }

    /// Removes a profile whose login record could not be written, so the
    /// email stays free and no profile is left without credentials.
    async fn discard_profile(&self, user_type: UserType, profile_id: &str) {
        let removed = match user_type {
            UserType::Donor => self.store.delete_donor(profile_id).await,
            UserType::Hospital => self.store.delete_hospital(profile_id).await,
            UserType::BloodBank => self.store.delete_bank(profile_id).await,
        };
        if let Err(err) = removed {
            warn!(
                "{} profile '{profile_id}' has no login and could not be removed: {err}",
                user_type.as_str()
            );
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "is required"));
    }
    Ok(())
}

fn valid_email(email: &str) -> Result<(), ValidationError> {
    required("email", email)?;
    let email = email.trim();
    let well_formed = email
        .split_once('@')
        .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.') && !domain.starts_with('.'));
    if !well_formed {
        return Err(ValidationError::new("email", format!("'{email}' is not an email address")));
    }
    Ok(())
}

fn valid_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::new(
            "password",
            format!("must be at least {MIN_PASSWORD_LEN} characters"),
        ));
    }
    Ok(())
}

fn valid_location(district: &str, town: &str) -> Result<(), ValidationError> {
    let Some(towns) = location::towns_of(district) else {
        return Err(ValidationError::new("district", format!("unknown district '{district}'")));
    };
    if !towns.contains(&town) {
        return Err(ValidationError::new(
            "town",
            format!("'{town}' is not a town of {district}"),
        ));
    }
    Ok(())
}

fn validate_donor(form: &DonorForm, now: chrono::DateTime<chrono::Utc>) -> Result<(), ValidationError> {
    required("full name", &form.full_name)?;
    required("phone", &form.phone)?;
    valid_email(&form.email)?;
    valid_password(&form.password)?;
    valid_location(&form.district, &form.nearest_town)?;

    if let Some(date) = form.last_donation_date.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
        let parsed = parse_donation_date(date)
            .map_err(|err| ValidationError::new("last donation date", err.to_string()))?;
        if parsed > now {
            return Err(ValidationError::new("last donation date", "cannot be in the future"));
        }
    }

    if let Some(distance) = form.distance_from_town {
        if !(distance >= 0.0) {
            return Err(ValidationError::new("distance from town", "must be zero or more"));
        }
    }
    Ok(())
}

fn validate_hospital(form: &HospitalForm) -> Result<(), ValidationError> {
    required("hospital name", &form.hospital_name)?;
    valid_email(&form.email)?;
    valid_password(&form.password)?;
    required("contact number", &form.contact_number)?;
    required("HFR id", &form.hfr_id)?;
    valid_location(&form.district, &form.town)
}

fn validate_bank(form: &BloodBankForm) -> Result<(), ValidationError> {
    required("blood bank name", &form.blood_bank_name)?;
    required("category", &form.category)?;
    valid_email(&form.email)?;
    valid_password(&form.password)?;
    required("contact number", &form.contact_number)?;
    required("address", &form.address)?;
    valid_location(&form.district, &form.town)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn donor_form() -> DonorForm {
        DonorForm {
            full_name: "Sita".into(),
            blood_group: BloodGroup::OPositive,
            last_donation_date: None,
            phone: "+91 98765 43210".into(),
            email: "sita@example.com".into(),
            password: "secret1".into(),
            district: "Guntur".into(),
            nearest_town: "Tenali".into(),
            village: None,
            distance_from_town: Some(0.0),
        }
    }

    fn now() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_valid_donor() {
        assert_eq!(validate_donor(&donor_form(), now()), Ok(()));
    }

    #[test]
    fn test_short_password() {
        let form = DonorForm {
            password: "12345".into(),
            ..donor_form()
        };
        assert_eq!(validate_donor(&form, now()).unwrap_err().field, "password");
    }

    #[test]
    fn test_town_outside_district() {
        let form = DonorForm {
            nearest_town: "Pedana".into(),
            ..donor_form()
        };
        assert_eq!(validate_donor(&form, now()).unwrap_err().field, "town");
    }

    #[test]
    fn test_unknown_district() {
        let form = DonorForm {
            district: "Atlantis".into(),
            ..donor_form()
        };
        assert_eq!(validate_donor(&form, now()).unwrap_err().field, "district");
    }

    #[test]
    fn test_future_donation_date() {
        let form = DonorForm {
            last_donation_date: Some("2025-07-01".into()),
            ..donor_form()
        };
        let err = validate_donor(&form, now()).unwrap_err();
        assert_eq!(err.field, "last donation date");
        assert_eq!(err.reason, "cannot be in the future");
    }

    #[test]
    fn test_bad_donation_date() {
        let form = DonorForm {
            last_donation_date: Some("01/02/2024".into()),
            ..donor_form()
        };
        assert_eq!(
            validate_donor(&form, now()).unwrap_err().field,
            "last donation date"
        );
    }

    #[test]
    fn test_negative_distance() {
        let form = DonorForm {
            distance_from_town: Some(-2.0),
            ..donor_form()
        };
        assert_eq!(
            validate_donor(&form, now()).unwrap_err().field,
            "distance from town"
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(valid_email("a@b.in").is_ok());
        assert!(valid_email("ab.in").is_err());
        assert!(valid_email("@b.in").is_err());
        assert!(valid_email("a@bin").is_err());
        assert!(valid_email("  ").is_err());
    }

    #[test]
    fn test_non_empty_trims() {
        assert_eq!(non_empty(Some("  ".into())), None);
        assert_eq!(non_empty(Some(" x ".into())), Some("x".into()));
    }
}
