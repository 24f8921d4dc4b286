//! # LifeLine Common
//!
//! Shared building blocks for the LifeLine workspace.
//!
//! * **[`models`]**: donors, facilities, accounts, recipients and camp photos.
//! * **[`location`]**: the district/town catalogue used to validate registrations.
//! * **[`ports`]**: traits the services depend on (repositories, clock, notifier).
//! * **[`session`]**: explicit session values handed to dashboards.
//! * **[`config`]** and **[`error`]**: runtime settings and error types.

pub mod config;
pub mod error;
pub mod location;
pub mod log;
pub mod models;
pub mod ports;
pub mod session;
