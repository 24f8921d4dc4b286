//! # Ports
//!
//! Traits the application services depend on. Concrete implementations live
//! in `lifeline_core::adapters`.
//!
//! ## Rules
//! 1. All items here must be `traits`.
//! 2. No concrete implementations allowed.
//! 3. Using domain models in method signatures is allowed and encouraged.
//!
//! * **[`repository`]**: access to the document store collections.
//! * **[`clock`]**: the current instant, injected so eligibility is testable.
//! * **[`notifier`]**: outbound donor notifications.

pub mod clock;
pub mod notifier;
pub mod repository;
