//! DTOs for API responses.
//!
//! The `/meteors` payload is [`bolide_core::MeteorPage`], shared with the
//! response cache.

use serde::Serialize;

/// Response for `/years`.
#[derive(Debug, Serialize)]
pub struct YearsResponse {
    /// Distinct calendar years, sorted as strings.
    pub years: Vec<String>,
}

/// Response for `/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "ok".
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Seconds since the first health probe.
    pub uptime_seconds: u64,
    /// Records currently held in the store.
    pub records_count: usize,
}
