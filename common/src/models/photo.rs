use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A donation camp picture shown in the public gallery.
///
/// `url` is whatever the uploader supplied (web link or data URL); LifeLine
/// never fetches or transcodes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampPhoto {
    #[serde(default)]
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub uploaded_by: String,
    pub created_at: DateTime<Utc>,
}
