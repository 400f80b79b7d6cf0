//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They return fixed longitudes and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::ports::{CelestialBody, Ephemeris};
use crate::error::EphemerisError;

// ============================================================================
// Mock Ephemeris
// ============================================================================

/// Ephemeris returning configured tropical longitudes
#[derive(Default)]
pub struct MockEphemeris {
    defaults: HashMap<CelestialBody, f64>,
    at_instant: HashMap<(CelestialBody, DateTime<Utc>), f64>,
    should_fail: bool,
    /// Every lookup made, in order
    pub lookups: Arc<RwLock<Vec<(CelestialBody, DateTime<Utc>)>>>,
}

impl MockEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Sun longitude returned for any instant without an override
    pub fn with_sun(mut self, tropical: f64) -> Self {
        self.defaults.insert(CelestialBody::Sun, tropical);
        self
    }

    /// Moon longitude returned for any instant without an override
    pub fn with_moon(mut self, tropical: f64) -> Self {
        self.defaults.insert(CelestialBody::Moon, tropical);
        self
    }

    /// Moon longitude for one specific instant
    pub fn with_moon_at(mut self, at: DateTime<Utc>, tropical: f64) -> Self {
        self.at_instant.insert((CelestialBody::Moon, at), tropical);
        self
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.read().unwrap().len()
    }
}

#[async_trait]
impl Ephemeris for MockEphemeris {
    async fn ecliptic_longitude(
        &self,
        body: CelestialBody,
        at: DateTime<Utc>,
    ) -> Result<f64, EphemerisError> {
        self.lookups.write().unwrap().push((body, at));

        if self.should_fail {
            return Err(EphemerisError::Computation("mock failure".to_string()));
        }

        self.at_instant
            .get(&(body, at))
            .or_else(|| self.defaults.get(&body))
            .copied()
            .ok_or_else(|| EphemerisError::UnsupportedBody(format!("{} not configured", body)))
    }
}
