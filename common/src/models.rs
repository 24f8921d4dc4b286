//! # Domain Models
//!
//! The records LifeLine reads from and writes to its document store.
//!
//! ## Core Entities
//! * [`donor::Donor`]: a registered donor, the input of the matching filter.
//! * [`facility::Hospital`] and [`facility::BloodBank`]: registered institutions.
//! * [`account::LoginRecord`]: credentials pointing at a profile.
//! * [`recipient::RecipientAccess`]: a patient-side dashboard visit.
//! * [`photo::CampPhoto`]: donation camp gallery entries.
//!
//! ## Value Objects
//! * [`blood::BloodGroup`]: the closed set of eight ABO/Rh groups.
//!
//! Field names serialize in camelCase so store files keep the layout of the
//! collections the web client used.

pub mod account;
pub mod blood;
pub mod donor;
pub mod facility;
pub mod photo;
pub mod recipient;
