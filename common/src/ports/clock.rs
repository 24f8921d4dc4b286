use chrono::{DateTime, Utc};

/// Source of "now" for anything time dependent.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
