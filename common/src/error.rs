//! Error types shared across the workspace.
//!
//! Services wrap these in `anyhow::Error` at the application boundary;
//! callers that need to branch on a failure use `downcast_ref`.

use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by a document store adapter.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to access store file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("store file {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode store contents: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("no document '{id}' in collection '{collection}'")]
    NotFound {
        collection: &'static str,
        id: String,
    },
}

/// A single rejected form field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Login and session failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("this view requires a {expected} session, got {actual}")]
    WrongRole {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("an account with email '{0}' already exists")]
    EmailTaken(String),

    #[error("login record points at missing profile '{0}'")]
    DanglingProfile(String),
}

/// Text that could not be turned into a domain value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown blood group '{0}' (expected one of A+, A-, B+, B-, AB+, AB-, O+, O-)")]
    BloodGroup(String),

    #[error("unrecognised date '{0}' (expected YYYY-MM-DD or an RFC 3339 timestamp)")]
    Date(String),

    #[error("unknown account type '{0}'")]
    UserType(String),
}
