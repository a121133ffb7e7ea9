// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for record timestamps and sweep cutoffs; injected so tests
/// can pin it.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
