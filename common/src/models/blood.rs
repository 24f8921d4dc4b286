//! # Blood Group Model
//!
//! Exact ABO/Rh labels. Matching anywhere in LifeLine is equality on this
//! type; there is deliberately no donor/recipient compatibility table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodGroup {
    /// All groups in the order the forms list them.
    pub const ALL: [BloodGroup; 8] = [
        BloodGroup::APositive,
        BloodGroup::ANegative,
        BloodGroup::BPositive,
        BloodGroup::BNegative,
        BloodGroup::AbPositive,
        BloodGroup::AbNegative,
        BloodGroup::OPositive,
        BloodGroup::ONegative,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
        }
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BloodGroup {
    type Err = ParseError;

    /// Case-sensitive: `"a+"` is not a blood group.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BloodGroup::ALL
            .into_iter()
            .find(|group| group.label() == s)
            .ok_or_else(|| ParseError::BloodGroup(s.to_string()))
    }
}

/// A blood group as a stored document records it.
///
/// Text that is not one of the eight labels is kept verbatim as
/// [`RecordedGroup::Unrecognised`] and written back unchanged. An
/// unrecognised group never equals any [`BloodGroup`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordedGroup {
    Known(BloodGroup),
    Unrecognised(String),
}

impl RecordedGroup {
    pub fn known(&self) -> Option<BloodGroup> {
        match self {
            RecordedGroup::Known(group) => Some(*group),
            RecordedGroup::Unrecognised(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RecordedGroup::Known(group) => group.label(),
            RecordedGroup::Unrecognised(raw) => raw,
        }
    }
}

impl Default for RecordedGroup {
    fn default() -> Self {
        RecordedGroup::Unrecognised(String::new())
    }
}

impl From<BloodGroup> for RecordedGroup {
    fn from(group: BloodGroup) -> Self {
        RecordedGroup::Known(group)
    }
}

impl From<&str> for RecordedGroup {
    fn from(text: &str) -> Self {
        match text.parse() {
            Ok(group) => RecordedGroup::Known(group),
            Err(_) => RecordedGroup::Unrecognised(text.to_string()),
        }
    }
}

impl PartialEq<BloodGroup> for RecordedGroup {
    fn eq(&self, other: &BloodGroup) -> bool {
        self.known() == Some(*other)
    }
}

impl fmt::Display for RecordedGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RecordedGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RecordedGroup {
    /// Never fails: `null`, numbers and other non-text values become an
    /// empty unrecognised group.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::String(text) => RecordedGroup::from(text.as_str()),
            _ => RecordedGroup::default(),
        })
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
