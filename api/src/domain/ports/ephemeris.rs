//! Ephemeris port trait
//!
//! Defines the interface to the astronomical position engine. The core only
//! ever asks one question: where is a body along the ecliptic at an instant.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EphemerisError;

/// Bodies the service looks up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CelestialBody {
    Sun,
    Moon,
}

impl std::fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CelestialBody::Sun => write!(f, "Sun"),
            CelestialBody::Moon => write!(f, "Moon"),
        }
    }
}

impl std::str::FromStr for CelestialBody {
    type Err = EphemerisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sun" => Ok(CelestialBody::Sun),
            "moon" => Ok(CelestialBody::Moon),
            _ => Err(EphemerisError::UnsupportedBody(s.to_string())),
        }
    }
}

/// Port trait for ecliptic position lookups
#[async_trait]
pub trait Ephemeris: Send + Sync {
    /// Apparent geocentric tropical ecliptic longitude in degrees, [0, 360)
    async fn ecliptic_longitude(
        &self,
        body: CelestialBody,
        at: DateTime<Utc>,
    ) -> Result<f64, EphemerisError>;
}
