//! # Donor Eligibility & Matching
//!
//! The filter that turns a fetched donor list into the donors who can give
//! the requested group right now.
//!
//! A donor matches when:
//! 1. their blood group equals the requested group (no compatibility table), and
//! 2. they never donated, or at least [`ELIGIBILITY_WINDOW_DAYS`] whole days
//!    have passed since their last donation. Partial days round up.
//!
//! Everything here is pure. "Now" is always a parameter; services read it
//! from a [`lifeline_common::ports::clock::Clock`].
//!
//! Location narrowing is a separate predicate ([`LocationFilter`]) that
//! callers apply after matching.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

use lifeline_common::models::blood::BloodGroup;
use lifeline_common::models::donor::Donor;

/// Minimum whole days between two donations.
pub const ELIGIBILITY_WINDOW_DAYS: i64 = 90;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// `ceil(|a - b| / 1 day)`.
pub fn whole_days_between(a: DateTime<Utc>, b: DateTime<Utc>) -> i64 {
    let millis = (a - b).num_milliseconds().abs();
    (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
}

/// Whether a donor whose last donation was `last_donation` may donate at `now`.
///
/// `None` means never donated and is always eligible. The distance is
/// absolute, so a date in the future counts the same as one in the past.
pub fn is_eligible(last_donation: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match last_donation {
        None => true,
        Some(last) => whole_days_between(now, last) >= ELIGIBILITY_WINDOW_DAYS,
    }
}

/// First instant at which a donor who gave at `last_donation` is eligible again.
///
/// `None` when that instant lies past the largest representable date.
pub fn eligible_from(last_donation: DateTime<Utc>) -> Option<DateTime<Utc>> {
    last_donation
        .checked_add_signed(Duration::days(ELIGIBILITY_WINDOW_DAYS - 1))?
        .checked_add_signed(Duration::milliseconds(1))
}

/// [`is_eligible`] applied to a stored record.
///
/// A last donation date that cannot be parsed makes the donor ineligible.
pub fn donor_is_eligible(donor: &Donor, now: DateTime<Utc>) -> bool {
    match donor.last_donation() {
        Ok(last) => is_eligible(last, now),
        Err(err) => {
            warn!("Donor '{}' skipped: {err}", donor.id);
            false
        }
    }
}

/// Whether the donor's recorded group is exactly `requested`.
///
/// A recorded group that is not one of the eight labels never matches.
pub fn donor_has_group(donor: &Donor, requested: BloodGroup) -> bool {
    match donor.blood_group.known() {
        Some(group) => group == requested,
        None => {
            warn!(
                "Donor '{}' skipped: unreadable blood group '{}'",
                donor.id, donor.blood_group
            );
            false
        }
    }
}

/// Donors of exactly `requested` group who are eligible at `now`.
///
/// Keeps the input order. Calling it twice on the same input gives the same
/// output.
pub fn find_matching_donors<I>(requested: BloodGroup, donors: I, now: DateTime<Utc>) -> Vec<Donor>
where
    I: IntoIterator<Item = Donor>,
{
    donors
        .into_iter()
        .filter(|donor| donor_has_group(donor, requested) && donor_is_eligible(donor, now))
        .collect()
}

/// [`find_matching_donors`] for a group given as text, as search requests
/// carry it.
///
/// An empty or unknown label matches nobody, including stored donors whose
/// own group text is equally unreadable.
pub fn find_matching_donors_by_label<I>(requested: &str, donors: I, now: DateTime<Utc>) -> Vec<Donor>
where
    I: IntoIterator<Item = Donor>,
{
    match requested.parse::<BloodGroup>() {
        Ok(group) => find_matching_donors(group, donors, now),
        Err(err) => {
            debug!("No donor can match: {err}");
            Vec::new()
        }
    }
}

/// Exact-match location narrowing for search results.
///
/// An unset or empty constraint accepts everyone. A set constraint requires
/// the donor to carry that field with exactly that value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationFilter {
    pub district: Option<String>,
    pub nearest_town: Option<String>,
}

impl LocationFilter {
    pub fn new(district: Option<&str>, nearest_town: Option<&str>) -> Self {
        let non_empty = |s: Option<&str>| s.filter(|s| !s.is_empty()).map(str::to_string);
        Self {
            district: non_empty(district),
            nearest_town: non_empty(nearest_town),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.district.is_none() && self.nearest_town.is_none()
    }

    pub fn accepts(&self, donor: &Donor) -> bool {
        field_matches(self.district.as_deref(), donor.district.as_deref())
            && field_matches(self.nearest_town.as_deref(), donor.nearest_town.as_deref())
    }

    pub fn apply(&self, donors: Vec<Donor>) -> Vec<Donor> {
        if self.is_empty() {
            return donors;
        }
        donors.into_iter().filter(|d| self.accepts(d)).collect()
    }
}

fn field_matches(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => actual == Some(wanted),
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
