//! # Donor Model
//!
//! A donor as stored in the `donors_list` collection.
//!
//! The last donation date is kept as the text the store holds and parsed
//! in [`Donor::last_donation`]; the eligibility rule decides what an
//! unreadable date means. The blood group is a [`RecordedGroup`], so an
//! empty, lowercase or missing group loads fine and simply matches nobody.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::models::blood::{BloodGroup, RecordedGroup};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donor {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub blood_group: RecordedGroup,
    /// `None` (or an empty string) means the donor has never donated.
    #[serde(default)]
    pub last_donation_date: Option<String>,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nearest_town: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub village: Option<String>,
    /// Kilometres from `nearest_town`; `0` when the donor lives in town.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_from_town: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Donor {
    /// A bare donor of the given group with no history or location.
    pub fn new(blood_group: BloodGroup) -> Self {
        Self {
            id: String::new(),
            full_name: String::new(),
            blood_group: blood_group.into(),
            last_donation_date: None,
            phone: String::new(),
            email: String::new(),
            district: None,
            nearest_town: None,
            village: None,
            distance_from_town: None,
            created_at: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn with_last_donation(mut self, date: impl Into<String>) -> Self {
        self.last_donation_date = Some(date.into());
        self
    }

    pub fn with_location(mut self, district: impl Into<String>, town: impl Into<String>) -> Self {
        self.district = Some(district.into());
        self.nearest_town = Some(town.into());
        self
    }

    /// Parsed last donation instant.
    ///
    /// * `Ok(None)` - never donated.
    /// * `Err(_)` - the stored text is not a date.
    pub fn last_donation(&self) -> Result<Option<DateTime<Utc>>, ParseError> {
        match self.last_donation_date.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => parse_donation_date(text).map(Some),
        }
    }
}

/// Accepts an RFC 3339 timestamp or a plain `YYYY-MM-DD` date (midnight UTC).
pub fn parse_donation_date(text: &str) -> Result<DateTime<Utc>, ParseError> {
    if let Ok(stamp) = DateTime::parse_from_rfc3339(text) {
        return Ok(stamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ParseError::Date(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_never_donated() {
        let donor = Donor::new(BloodGroup::APositive);
        assert_eq!(donor.last_donation(), Ok(None));
    }

    #[test]
    fn test_empty_date_counts_as_never() {
        let donor = Donor::new(BloodGroup::APositive).with_last_donation("");
        assert_eq!(donor.last_donation(), Ok(None));
    }

    #[test]
    fn test_plain_date_is_midnight_utc() {
        let donor = Donor::new(BloodGroup::OPositive).with_last_donation("2020-01-01");
        let expected = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(donor.last_donation(), Ok(Some(expected)));
    }

    #[test]
    fn test_rfc3339_with_offset() {
        let parsed = parse_donation_date("2024-03-10T05:30:00+05:30").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_garbage_date() {
        let donor = Donor::new(BloodGroup::BNegative).with_last_donation("last spring");
        assert_eq!(
            donor.last_donation(),
            Err(ParseError::Date("last spring".to_string()))
        );
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let donor: Donor =
            serde_json::from_str(r#"{"bloodGroup":"A+","lastDonationDate":null}"#).unwrap();
        assert_eq!(donor.blood_group, BloodGroup::APositive);
        assert!(donor.last_donation_date.is_none());
        assert!(donor.district.is_none());
    }

    #[test]
    fn test_unreadable_group_still_loads() {
        let donors: Vec<Donor> = serde_json::from_str(
            r#"[{"bloodGroup":"A+"},{"bloodGroup":""},{"bloodGroup":"b+"},{"fullName":"No group"}]"#,
        )
        .unwrap();
        assert_eq!(donors.len(), 4);
        assert_eq!(donors[0].blood_group, BloodGroup::APositive);
        assert_eq!(donors[1].blood_group.known(), None);
        assert_eq!(donors[2].blood_group, RecordedGroup::Unrecognised("b+".to_string()));
        assert_eq!(donors[3].blood_group, RecordedGroup::default());
    }

    #[test]
    fn test_serialize_camel_case() {
        let donor = Donor::new(BloodGroup::OPositive)
            .with_name("Ravi")
            .with_location("Krishna", "Pedana");
        let json = serde_json::to_value(&donor).unwrap();
        assert_eq!(json["fullName"], "Ravi");
        assert_eq!(json["bloodGroup"], "O+");
        assert_eq!(json["nearestTown"], "Pedana");
        assert!(json.get("village").is_none());
    }
}
