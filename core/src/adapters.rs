//! # Adapters
//!
//! Concrete implementations of the ports in [`lifeline_common::ports`].
//!
//! * **[`json_store`]**: the document store, in memory or backed by one JSON file.
//! * **[`clock`]**: system and fixed clocks.
//! * **[`notifier`]**: donor notifications delivered to the log.

pub mod clock;
pub mod json_store;
pub mod notifier;
