//! Repository traits, one per store collection.
//!
//! Every call is a single round trip to the store. Failures surface as a
//! [`StoreError`]; none of these methods retry.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::account::LoginRecord;
use crate::models::blood::BloodGroup;
use crate::models::donor::Donor;
use crate::models::facility::{BloodBank, Hospital};
use crate::models::photo::CampPhoto;
use crate::models::recipient::RecipientAccess;

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait DonorRepository: Send + Sync {
    /// Every donor, in insertion order.
    async fn all_donors(&self) -> StoreResult<Vec<Donor>>;

    /// Donors whose group equals `group`. No eligibility filtering.
    async fn find_by_blood_group(&self, group: BloodGroup) -> StoreResult<Vec<Donor>>;

    async fn donor(&self, id: &str) -> StoreResult<Option<Donor>>;

    /// Stores `donor` under a fresh id and returns that id.
    async fn insert_donor(&self, donor: Donor) -> StoreResult<String>;

    /// Fails with [`StoreError::NotFound`] if `id` does not exist.
    async fn delete_donor(&self, id: &str) -> StoreResult<()>;
}

#[async_trait]
pub trait HospitalRepository: Send + Sync {
    async fn all_hospitals(&self) -> StoreResult<Vec<Hospital>>;

    async fn hospital(&self, id: &str) -> StoreResult<Option<Hospital>>;

    async fn insert_hospital(&self, hospital: Hospital) -> StoreResult<String>;

    async fn delete_hospital(&self, id: &str) -> StoreResult<()>;
}

#[async_trait]
pub trait BloodBankRepository: Send + Sync {
    async fn all_banks(&self) -> StoreResult<Vec<BloodBank>>;

    /// Banks in `district`, narrowed to `town` when given.
    async fn banks_in(&self, district: &str, town: Option<&str>) -> StoreResult<Vec<BloodBank>>;

    async fn bank(&self, id: &str) -> StoreResult<Option<BloodBank>>;

    async fn insert_bank(&self, bank: BloodBank) -> StoreResult<String>;

    async fn delete_bank(&self, id: &str) -> StoreResult<()>;

    /// Overwrites the unit count of one group in a bank's inventory.
    async fn set_stock(&self, id: &str, group: BloodGroup, units: u32) -> StoreResult<()>;
}

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn login_by_email(&self, email: &str) -> StoreResult<Option<LoginRecord>>;

    async fn insert_login(&self, record: LoginRecord) -> StoreResult<String>;
}

#[async_trait]
pub trait RecipientRepository: Send + Sync {
    async fn insert_recipient(&self, access: RecipientAccess) -> StoreResult<String>;

    async fn recipient_count(&self) -> StoreResult<usize>;
}

#[async_trait]
pub trait PhotoRepository: Send + Sync {
    /// Newest first, at most `limit`.
    async fn latest_photos(&self, limit: usize) -> StoreResult<Vec<CampPhoto>>;

    async fn insert_photo(&self, photo: CampPhoto) -> StoreResult<String>;

    /// Fails with [`StoreError::NotFound`] if `id` does not exist.
    async fn delete_photo(&self, id: &str) -> StoreResult<()>;
}

/// Everything the services need from one backing store.
pub trait DocumentStore:
    DonorRepository
    + HospitalRepository
    + BloodBankRepository
    + AccountRepository
    + RecipientRepository
    + PhotoRepository
{
}

impl<T> DocumentStore for T where
    T: DonorRepository
        + HospitalRepository
        + BloodBankRepository
        + AccountRepository
        + RecipientRepository
        + PhotoRepository
{
}
