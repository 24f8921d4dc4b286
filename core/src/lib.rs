//! # LifeLine Core
//!
//! Domain rules and use cases for the LifeLine blood donation network.
//!
//! * **[`matching`]**: donor eligibility and the blood group / location filter.
//! * **[`inventory`]**: per-group stock totals and grading.
//! * **[`directory`]**: the browsable blood bank directory.
//! * **[`credentials`]**: salted password digests.
//! * **[`services`]**: application services orchestrating the above over the ports.
//! * **[`adapters`]**: concrete port implementations (JSON store, clocks, notifier).

pub mod adapters;
pub mod credentials;
pub mod directory;
pub mod inventory;
pub mod matching;
pub mod services;
