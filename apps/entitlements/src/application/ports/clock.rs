use chrono::{DateTime, Utc};

/// Wall clock, injectable so cache expiry can be tested.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
