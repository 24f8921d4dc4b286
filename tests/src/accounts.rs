#![cfg(test)]
use std::sync::Arc;

use async_trait::async_trait;

use lifeline_common::config::{DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD};
use lifeline_common::error::{AuthError, StoreError, ValidationError};
use lifeline_common::models::account::LoginRecord;
use lifeline_common::models::blood::BloodGroup;
use lifeline_common::models::donor::Donor;
use lifeline_common::models::facility::{BloodBank, DEFAULT_BANK_CATEGORY, Hospital};
use lifeline_common::models::photo::CampPhoto;
use lifeline_common::models::recipient::RecipientAccess;
use lifeline_common::ports::repository::{
    AccountRepository, BloodBankRepository, DonorRepository, HospitalRepository,
    PhotoRepository, RecipientRepository, StoreResult,
};
use lifeline_common::session::Role;
use lifeline_core::adapters::clock::FixedClock;
use lifeline_core::adapters::json_store::JsonStore;
use lifeline_core::services::auth::RecipientForm;
use lifeline_core::services::registration::{BloodBankForm, HospitalForm, RegistrationService};

use crate::fixtures::{donor_form, now, world};

#[tokio::test]
async fn registered_donor_can_log_in() {
    let w = world();
    let registered = w
        .services
        .registration
        .register_donor(donor_form("ravi@example.com"))
        .await
        .unwrap();

    let session = w
        .services
        .auth
        .login("ravi@example.com", "donate123")
        .await
        .unwrap();
    assert_eq!(session.role, Role::Donor);
    assert_eq!(session.profile_id.as_deref(), Some(registered.profile_id.as_str()));
    assert_eq!(session.display_name, "Ravi Kumar");
    assert_eq!(session.blood_group, Some(BloodGroup::APositive));
    assert_eq!(session.started_at, now());
}

#[tokio::test]
async fn password_is_not_stored_in_clear() {
    let w = world();
    w.services
        .registration
        .register_donor(donor_form("ravi@example.com"))
        .await
        .unwrap();

    let record = w.store.login_by_email("ravi@example.com").await.unwrap().unwrap();
    assert_ne!(record.password_hash, "donate123");
    assert_eq!(record.password_hash.len(), 64);
}

#[tokio::test]
async fn wrong_password_is_rejected() {
    let w = world();
    w.services
        .registration
        .register_donor(donor_form("ravi@example.com"))
        .await
        .unwrap();

    let err = w
        .services
        .auth
        .login("ravi@example.com", "guess")
        .await
        .unwrap_err();
    assert_eq!(err.downcast_ref::<AuthError>(), Some(&AuthError::InvalidCredentials));
    assert_eq!(err.to_string(), "Invalid email or password");

    let unknown = w.services.auth.login("nobody@example.com", "donate123").await;
    assert!(unknown.is_err());
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let w = world();
    let registration = &w.services.registration;
    registration.register_donor(donor_form("dup@example.com")).await.unwrap();

    let err = registration
        .register_hospital(HospitalForm {
            hospital_name: "City Hospital".into(),
            email: "dup@example.com".into(),
            password: "hospital1".into(),
            contact_number: "0863 222 3333".into(),
            hfr_id: "IN2810000001".into(),
            district: "Guntur".into(),
            town: "Guntur".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(
        err.downcast_ref::<AuthError>(),
        Some(&AuthError::EmailTaken("dup@example.com".into()))
    );
}

#[tokio::test]
async fn invalid_form_writes_nothing() {
    let w = world();
    let mut form = donor_form("short@example.com");
    form.password = "123".into();

    let err = w.services.registration.register_donor(form).await.unwrap_err();
    assert_eq!(err.downcast_ref::<ValidationError>().map(|e| e.field), Some("password"));
    assert!(w.store.login_by_email("short@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn bank_and_hospital_sessions_carry_their_names() {
    let w = world();
    let registration = &w.services.registration;
    registration
        .register_bank(BloodBankForm {
            blood_bank_name: "Tenali Red Cross".into(),
            category: DEFAULT_BANK_CATEGORY.into(),
            email: "bank@example.com".into(),
            password: "bank1234".into(),
            contact_number: "08644 223344".into(),
            address: "Bose Road, Tenali".into(),
            district: "Guntur".into(),
            town: "Tenali".into(),
            testing_facilities: None,
            processing_facilities: None,
            storage_capacity: Some("  ".into()),
        })
        .await
        .unwrap();

    let session = w.services.auth.login("bank@example.com", "bank1234").await.unwrap();
    assert_eq!(session.role, Role::BloodBank);
    assert_eq!(session.display_name, "Tenali Red Cross");
    assert_eq!(session.blood_group, None);
}

#[tokio::test]
async fn configured_admin_logs_in_without_an_account() {
    let w = world();
    let session = w
        .services
        .auth
        .login(DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD)
        .await
        .unwrap();
    assert_eq!(session.role, Role::Admin);
    assert!(session.profile_id.is_none());
    assert_eq!(w.config.admin_email, DEFAULT_ADMIN_EMAIL);
}

#[tokio::test]
async fn recipient_access_is_recorded() {
    let w = world();
    let session = w
        .services
        .auth
        .recipient_access(RecipientForm {
            full_name: "Lakshmi".into(),
            phone: "9000000000".into(),
            email: "lakshmi@example.com".into(),
            blood_group: Some(BloodGroup::ONegative),
        })
        .await
        .unwrap();

    assert_eq!(session.role, Role::Recipient);
    assert_eq!(session.blood_group, Some(BloodGroup::ONegative));
    assert_eq!(w.store.recipient_count().await.unwrap(), 1);
    w.services.auth.logout(session);
}

/// Delegates to a [`JsonStore`] but refuses to write login records.
struct LoginsDown(JsonStore);

#[async_trait]
impl DonorRepository for LoginsDown {
    async fn all_donors(&self) -> StoreResult<Vec<Donor>> {
        self.0.all_donors().await
    }
    async fn find_by_blood_group(&self, group: BloodGroup) -> StoreResult<Vec<Donor>> {
        self.0.find_by_blood_group(group).await
    }
    async fn donor(&self, id: &str) -> StoreResult<Option<Donor>> {
        self.0.donor(id).await
    }
    async fn insert_donor(&self, donor: Donor) -> StoreResult<String> {
        self.0.insert_donor(donor).await
    }
    async fn delete_donor(&self, id: &str) -> StoreResult<()> {
        self.0.delete_donor(id).await
    }
}

#[async_trait]
impl HospitalRepository for LoginsDown {
    async fn all_hospitals(&self) -> StoreResult<Vec<Hospital>> {
        self.0.all_hospitals().await
    }
    async fn hospital(&self, id: &str) -> StoreResult<Option<Hospital>> {
        self.0.hospital(id).await
    }
    async fn insert_hospital(&self, hospital: Hospital) -> StoreResult<String> {
        self.0.insert_hospital(hospital).await
    }
    async fn delete_hospital(&self, id: &str) -> StoreResult<()> {
        self.0.delete_hospital(id).await
    }
}

#[async_trait]
impl BloodBankRepository for LoginsDown {
    async fn all_banks(&self) -> StoreResult<Vec<BloodBank>> {
        self.0.all_banks().await
    }
    async fn banks_in(&self, district: &str, town: Option<&str>) -> StoreResult<Vec<BloodBank>> {
        self.0.banks_in(district, town).await
    }
    async fn bank(&self, id: &str) -> StoreResult<Option<BloodBank>> {
        self.0.bank(id).await
    }
    async fn insert_bank(&self, bank: BloodBank) -> StoreResult<String> {
        self.0.insert_bank(bank).await
    }
    async fn delete_bank(&self, id: &str) -> StoreResult<()> {
        self.0.delete_bank(id).await
    }
    async fn set_stock(&self, id: &str, group: BloodGroup, units: u32) -> StoreResult<()> {
        self.0.set_stock(id, group, units).await
    }
}

#[async_trait]
impl AccountRepository for LoginsDown {
    async fn login_by_email(&self, email: &str) -> StoreResult<Option<LoginRecord>> {
        self.0.login_by_email(email).await
    }
    async fn insert_login(&self, _record: LoginRecord) -> StoreResult<String> {
        Err(StoreError::NotFound {
            collection: "login_details",
            id: "*".into(),
        })
    }
}

#[async_trait]
impl RecipientRepository for LoginsDown {
    async fn insert_recipient(&self, access: RecipientAccess) -> StoreResult<String> {
        self.0.insert_recipient(access).await
    }
    async fn recipient_count(&self) -> StoreResult<usize> {
        self.0.recipient_count().await
    }
}

#[async_trait]
impl PhotoRepository for LoginsDown {
    async fn latest_photos(&self, limit: usize) -> StoreResult<Vec<CampPhoto>> {
        self.0.latest_photos(limit).await
    }
    async fn insert_photo(&self, photo: CampPhoto) -> StoreResult<String> {
        self.0.insert_photo(photo).await
    }
    async fn delete_photo(&self, id: &str) -> StoreResult<()> {
        self.0.delete_photo(id).await
    }
}

#[tokio::test]
async fn failed_login_write_removes_the_profile() {
    let store = Arc::new(LoginsDown(JsonStore::in_memory()));
    let registration = RegistrationService::new(store.clone(), Arc::new(FixedClock(now())));

    let err = registration
        .register_donor(donor_form("ravi@example.com"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("login details"));
    assert!(store.all_donors().await.unwrap().is_empty());

    let err = registration
        .register_hospital(HospitalForm {
            hospital_name: "City Hospital".into(),
            email: "city@example.com".into(),
            password: "hospital1".into(),
            contact_number: "0863 222 3333".into(),
            hfr_id: "IN2810000001".into(),
            district: "Guntur".into(),
            town: "Guntur".into(),
        })
        .await;
    assert!(err.is_err());
    assert!(store.all_hospitals().await.unwrap().is_empty());
}
