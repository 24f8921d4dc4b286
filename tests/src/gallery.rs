#![cfg(test)]
use std::sync::Arc;

use async_trait::async_trait;

use lifeline_common::config::{DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD};
use lifeline_common::error::StoreError;
use lifeline_common::models::account::LoginRecord;
use lifeline_common::models::blood::BloodGroup;
use lifeline_common::models::donor::Donor;
use lifeline_common::models::facility::{BloodBank, Hospital};
use lifeline_common::models::photo::CampPhoto;
use lifeline_common::models::recipient::RecipientAccess;
use lifeline_common::ports::repository::{
    AccountRepository, BloodBankRepository, DonorRepository, HospitalRepository,
    PhotoRepository, RecipientRepository, StoreResult,
};
use lifeline_core::services::gallery::GalleryService;

use crate::fixtures::world;

#[tokio::test]
async fn empty_store_shows_placeholders() {
    let w = world();
    let photos = w.services.gallery.camp_photos().await;
    assert_eq!(photos.len(), 3);
    assert!(photos.iter().all(|p| p.placeholder));
}

#[tokio::test]
async fn admin_photos_replace_placeholders() {
    let w = world();
    let admin = w
        .services
        .auth
        .login(DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD)
        .await
        .unwrap();

    let mut ids = Vec::new();
    for n in 0..12 {
        let id = w
            .services
            .admin
            .add_photo(&admin, &format!("https://camps.example/{n}.jpg"), &format!("Camp {n}"))
            .await
            .unwrap();
        ids.push(id);
    }

    let gallery = w.services.gallery.camp_photos().await;
    assert_eq!(gallery.len(), 10);
    assert!(gallery.iter().all(|p| !p.placeholder));

    w.services.admin.delete_photo(&admin, &ids[0]).await.unwrap();
    assert_eq!(w.services.admin.photos(&admin).await.unwrap().len(), 11);
    assert!(w.services.admin.delete_photo(&admin, &ids[0]).await.is_err());

    let stored = w.services.admin.photos(&admin).await.unwrap();
    assert!(stored.iter().all(|p| p.uploaded_by == "admin"));
}

#[tokio::test]
async fn empty_photo_url_is_rejected() {
    let w = world();
    let admin = w
        .services
        .auth
        .login(DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD)
        .await
        .unwrap();
    assert!(w.services.admin.add_photo(&admin, "  ", "Camp").await.is_err());
}

/// A store whose every call fails.
struct BrokenStore;

fn broken<T>() -> StoreResult<T> {
    Err(StoreError::NotFound {
        collection: "camp_photos",
        id: "*".into(),
    })
}

#[async_trait]
impl DonorRepository for BrokenStore {
    async fn all_donors(&self) -> StoreResult<Vec<Donor>> {
        broken()
    }
    async fn find_by_blood_group(&self, _group: BloodGroup) -> StoreResult<Vec<Donor>> {
        broken()
    }
    async fn donor(&self, _id: &str) -> StoreResult<Option<Donor>> {
        broken()
    }
    async fn insert_donor(&self, _donor: Donor) -> StoreResult<String> {
        broken()
    }
    async fn delete_donor(&self, _id: &str) -> StoreResult<()> {
        broken()
    }
}

#[async_trait]
impl HospitalRepository for BrokenStore {
    async fn all_hospitals(&self) -> StoreResult<Vec<Hospital>> {
        broken()
    }
    async fn hospital(&self, _id: &str) -> StoreResult<Option<Hospital>> {
        broken()
    }
    async fn insert_hospital(&self, _hospital: Hospital) -> StoreResult<String> {
        broken()
    }
    async fn delete_hospital(&self, _id: &str) -> StoreResult<()> {
        broken()
    }
}

#[async_trait]
impl BloodBankRepository for BrokenStore {
    async fn all_banks(&self) -> StoreResult<Vec<BloodBank>> {
        broken()
    }
    async fn banks_in(&self, _district: &str, _town: Option<&str>) -> StoreResult<Vec<BloodBank>> {
        broken()
    }
    async fn bank(&self, _id: &str) -> StoreResult<Option<BloodBank>> {
        broken()
    }
    async fn insert_bank(&self, _bank: BloodBank) -> StoreResult<String> {
        broken()
    }
    async fn delete_bank(&self, _id: &str) -> StoreResult<()> {
        broken()
    }
    async fn set_stock(&self, _id: &str, _group: BloodGroup, _units: u32) -> StoreResult<()> {
        broken()
    }
}

#[async_trait]
impl AccountRepository for BrokenStore {
    async fn login_by_email(&self, _email: &str) -> StoreResult<Option<LoginRecord>> {
        broken()
    }
    async fn insert_login(&self, _record: LoginRecord) -> StoreResult<String> {
        broken()
    }
}

#[async_trait]
impl RecipientRepository for BrokenStore {
    async fn insert_recipient(&self, _access: RecipientAccess) -> StoreResult<String> {
        broken()
    }
    async fn recipient_count(&self) -> StoreResult<usize> {
        broken()
    }
}

#[async_trait]
impl PhotoRepository for BrokenStore {
    async fn latest_photos(&self, _limit: usize) -> StoreResult<Vec<CampPhoto>> {
        broken()
    }
    async fn insert_photo(&self, _photo: CampPhoto) -> StoreResult<String> {
        broken()
    }
    async fn delete_photo(&self, _id: &str) -> StoreResult<()> {
        broken()
    }
}

#[tokio::test]
async fn unreadable_store_still_shows_placeholders() {
    let gallery = GalleryService::new(Arc::new(BrokenStore));
    let photos = gallery.camp_photos().await;
    assert_eq!(photos.len(), 2);
    assert_eq!(photos[0].caption, "Blood Donation Camp 2024");
}
