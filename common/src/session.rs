//! # Sessions
//!
//! A [`Session`] is created by a successful login (or recipient access) and
//! handed by value or reference to every view that needs to know who is
//! acting. There is no ambient "current user": a view that is not given a
//! session cannot act on anyone's behalf, and [`Session::end`] consumes it.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::AuthError;
use crate::models::account::UserType;
use crate::models::blood::BloodGroup;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Donor,
    Hospital,
    BloodBank,
    Recipient,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Donor => "donor",
            Role::Hospital => "hospital",
            Role::BloodBank => "blood_bank",
            Role::Recipient => "recipient",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<UserType> for Role {
    fn from(user_type: UserType) -> Self {
        match user_type {
            UserType::Donor => Role::Donor,
            UserType::Hospital => Role::Hospital,
            UserType::BloodBank => Role::BloodBank,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub role: Role,
    /// Id of the profile document; `None` for the configured admin.
    pub profile_id: Option<String>,
    pub display_name: String,
    pub email: String,
    /// Set for donors and for recipients who picked a group.
    pub blood_group: Option<BloodGroup>,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn admin(email: impl Into<String>, started_at: DateTime<Utc>) -> Self {
        Self {
            role: Role::Admin,
            profile_id: None,
            display_name: String::from("Administrator"),
            email: email.into(),
            blood_group: None,
            started_at,
        }
    }

    /// Fails with [`AuthError::WrongRole`] unless this session has `role`.
    pub fn require(&self, role: Role) -> Result<(), AuthError> {
        if self.role == role {
            Ok(())
        } else {
            Err(AuthError::WrongRole {
                expected: role.as_str(),
                actual: self.role.as_str(),
            })
        }
    }

    /// Profile id of a non-admin session.
    pub fn profile_id(&self) -> Result<&str, AuthError> {
        self.profile_id
            .as_deref()
            .ok_or_else(|| AuthError::DanglingProfile(self.email.clone()))
    }

    /// Ends the session. Returns how long it lasted.
    pub fn end(self, now: DateTime<Utc>) -> chrono::Duration {
        now - self.started_at
    }
}
