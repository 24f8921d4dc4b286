use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::blood::BloodGroup;

/// A recipient opening the dashboard, kept in `recipients_temp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientAccess {
    #[serde(default)]
    pub id: String,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    /// Absent when the patient did not pick a group; the dashboard then lists nobody.
    #[serde(default)]
    pub blood_group: Option<BloodGroup>,
    pub login_time: DateTime<Utc>,
}
