use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Kind of profile a stored login opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Donor,
    Hospital,
    BloodBank,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Donor => "donor",
            UserType::Hospital => "hospital",
            UserType::BloodBank => "blood_bank",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "donor" => Ok(UserType::Donor),
            "hospital" => Ok(UserType::Hospital),
            "blood_bank" => Ok(UserType::BloodBank),
            other => Err(ParseError::UserType(other.to_string())),
        }
    }
}

/// An entry of the `login_details` collection.
///
/// Passwords are never stored; `password_hash` is a hex SHA-256 of
/// `salt || password`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRecord {
    #[serde(default)]
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub salt: String,
    pub user_type: UserType,
    pub profile_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
