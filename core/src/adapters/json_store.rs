//! # JSON Document Store
//!
//! Implements every repository port over six in-memory collections. With a
//! path the collections are loaded from, and rewritten to, a single JSON file
//! after each mutation; without one they vanish when the process exits.
//!
//! File layout (all keys optional):
//! ```json
//! {
//!   "donors_list": [], "hospitals_list": [], "blood_banks_list": [],
//!   "login_details": [], "recipients_temp": [], "camp_photos": []
//! }
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rand::Rng;
use rand::distr::Alphanumeric;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

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

const DOCUMENT_ID_LEN: usize = 20;

#[derive(Debug, Default, Serialize, Deserialize)]
struct Collections {
    #[serde(default)]
    donors_list: Vec<Donor>,
    #[serde(default)]
    hospitals_list: Vec<Hospital>,
    #[serde(default)]
    blood_banks_list: Vec<BloodBank>,
    #[serde(default)]
    login_details: Vec<LoginRecord>,
    #[serde(default)]
    recipients_temp: Vec<RecipientAccess>,
    #[serde(default)]
    camp_photos: Vec<CampPhoto>,
}

pub struct JsonStore {
    path: Option<PathBuf>,
    data: RwLock<Collections>,
}

impl JsonStore {
    pub fn in_memory() -> Self {
        Self {
            path: None,
            data: RwLock::new(Collections::default()),
        }
    }

    /// Loads `path`, or starts empty if the file does not exist yet.
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let data = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| StoreError::Malformed {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("Store file {} not found, starting empty", path.display());
                Collections::default()
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        Ok(Self {
            path: Some(path),
            data: RwLock::new(data),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    async fn persist(&self, data: &Collections) -> StoreResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let bytes = serde_json::to_vec_pretty(data)?;
        let io_err = |source: std::io::Error| StoreError::Io {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }

        // Readers only ever see a complete file.
        let staging = path.with_extension("json.tmp");
        tokio::fs::write(&staging, bytes).await.map_err(io_err)?;
        tokio::fs::rename(&staging, path).await.map_err(io_err)?;
        Ok(())
    }

    /// Gives `doc` a fresh id, appends it to `collection` and persists.
    ///
    /// If the file cannot be written the document is dropped again, so memory
    /// never holds more than the file.
    async fn insert_with<T, F>(&self, collection: F, mut doc: T) -> StoreResult<String>
    where
        F: Fn(&mut Collections) -> &mut Vec<T>,
        T: HasId,
    {
        let mut data = self.data.write().await;
        let id = new_document_id();
        doc.set_id(id.clone());
        collection(&mut *data).push(doc);
        if let Err(err) = self.persist(&data).await {
            collection(&mut *data).pop();
            return Err(err);
        }
        Ok(id)
    }

    /// Removes the document `id` from `collection` and persists.
    async fn remove_with<T, F>(&self, collection: F, name: &'static str, id: &str) -> StoreResult<()>
    where
        F: FnOnce(&mut Collections) -> &mut Vec<T>,
        T: HasId,
    {
        let mut data = self.data.write().await;
        let docs = collection(&mut *data);
        let before = docs.len();
        docs.retain(|doc| doc.id() != id);
        if docs.len() == before {
            return Err(StoreError::NotFound {
                collection: name,
                id: id.to_string(),
            });
        }
        self.persist(&data).await
    }
}

fn new_document_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(DOCUMENT_ID_LEN)
        .map(char::from)
        .collect()
}

trait HasId {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

macro_rules! impl_has_id {
    ($($ty:ty),*) => {
        $(impl HasId for $ty {
            fn id(&self) -> &str {
                &self.id
            }

            fn set_id(&mut self, id: String) {
                self.id = id;
            }
        })*
    };
}

impl_has_id!(Donor, Hospital, BloodBank, LoginRecord, RecipientAccess, CampPhoto);

#[async_trait]
impl DonorRepository for JsonStore {
    async fn all_donors(&self) -> StoreResult<Vec<Donor>> {
        Ok(self.data.read().await.donors_list.clone())
    }

    async fn find_by_blood_group(&self, group: BloodGroup) -> StoreResult<Vec<Donor>> {
        let data = self.data.read().await;
        Ok(data
            .donors_list
            .iter()
            .filter(|d| d.blood_group == group)
            .cloned()
            .collect())
    }

    async fn donor(&self, id: &str) -> StoreResult<Option<Donor>> {
        let data = self.data.read().await;
        Ok(data.donors_list.iter().find(|d| d.id == id).cloned())
    }

    async fn insert_donor(&self, donor: Donor) -> StoreResult<String> {
        self.insert_with(|c| &mut c.donors_list, donor).await
    }

    async fn delete_donor(&self, id: &str) -> StoreResult<()> {
        self.remove_with(|c| &mut c.donors_list, "donors_list", id).await
    }
}

#[async_trait]
impl HospitalRepository for JsonStore {
    async fn all_hospitals(&self) -> StoreResult<Vec<Hospital>> {
        Ok(self.data.read().await.hospitals_list.clone())
    }

    async fn hospital(&self, id: &str) -> StoreResult<Option<Hospital>> {
        let data = self.data.read().await;
        Ok(data.hospitals_list.iter().find(|h| h.id == id).cloned())
    }

    async fn insert_hospital(&self, hospital: Hospital) -> StoreResult<String> {
        self.insert_with(|c| &mut c.hospitals_list, hospital).await
    }

    async fn delete_hospital(&self, id: &str) -> StoreResult<()> {
        self.remove_with(|c| &mut c.hospitals_list, "hospitals_list", id).await
    }
}

#[async_trait]
impl BloodBankRepository for JsonStore {
    async fn all_banks(&self) -> StoreResult<Vec<BloodBank>> {
        Ok(self.data.read().await.blood_banks_list.clone())
    }

    async fn banks_in(&self, district: &str, town: Option<&str>) -> StoreResult<Vec<BloodBank>> {
        let data = self.data.read().await;
        Ok(data
            .blood_banks_list
            .iter()
            .filter(|b| b.district.as_deref() == Some(district))
            .filter(|b| town.is_none_or(|town| b.town.as_deref() == Some(town)))
            .cloned()
            .collect())
    }

    async fn bank(&self, id: &str) -> StoreResult<Option<BloodBank>> {
        let data = self.data.read().await;
        Ok(data.blood_banks_list.iter().find(|b| b.id == id).cloned())
    }

    async fn insert_bank(&self, bank: BloodBank) -> StoreResult<String> {
        self.insert_with(|c| &mut c.blood_banks_list, bank).await
    }

    async fn delete_bank(&self, id: &str) -> StoreResult<()> {
        self.remove_with(|c| &mut c.blood_banks_list, "blood_banks_list", id).await
    }

    async fn set_stock(&self, id: &str, group: BloodGroup, units: u32) -> StoreResult<()> {
        let mut data = self.data.write().await;
        let bank = data
            .blood_banks_list
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| StoreError::NotFound {
                collection: "blood_banks_list",
                id: id.to_string(),
            })?;
        bank.inventory.insert(group, units);
        self.persist(&data).await
    }
}

#[async_trait]
impl AccountRepository for JsonStore {
    async fn login_by_email(&self, email: &str) -> StoreResult<Option<LoginRecord>> {
        let data = self.data.read().await;
        Ok(data.login_details.iter().find(|l| l.email == email).cloned())
    }

    async fn insert_login(&self, record: LoginRecord) -> StoreResult<String> {
        self.insert_with(|c| &mut c.login_details, record).await
    }
}

#[async_trait]
impl RecipientRepository for JsonStore {
    async fn insert_recipient(&self, access: RecipientAccess) -> StoreResult<String> {
        self.insert_with(|c| &mut c.recipients_temp, access).await
    }

    async fn recipient_count(&self) -> StoreResult<usize> {
        Ok(self.data.read().await.recipients_temp.len())
    }
}

#[async_trait]
impl PhotoRepository for JsonStore {
    async fn latest_photos(&self, limit: usize) -> StoreResult<Vec<CampPhoto>> {
        let mut photos = self.data.read().await.camp_photos.clone();
        photos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        photos.truncate(limit);
        Ok(photos)
    }

    async fn insert_photo(&self, photo: CampPhoto) -> StoreResult<String> {
        self.insert_with(|c| &mut c.camp_photos, photo).await
    }

    async fn delete_photo(&self, id: &str) -> StoreResult<()> {
        self.remove_with(|c| &mut c.camp_photos, "camp_photos", id).await
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
