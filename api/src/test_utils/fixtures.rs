//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::entities::{normalize_degrees, Ayanamsa};

/// A fixed birth instant: 1998-05-15 14:30 UTC
pub fn birth_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1998, 5, 15, 14, 30, 0).unwrap()
}

/// Tropical longitude that converts to `sidereal` under the default ayanamsa
pub fn tropical_for(sidereal: f64) -> f64 {
    normalize_degrees(sidereal + Ayanamsa::default().degrees())
}
