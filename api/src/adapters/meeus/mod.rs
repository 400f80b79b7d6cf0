//! Analytic ephemeris adapter
//!
//! Computes Sun and Moon longitudes from closed-form series instead of
//! reading an ephemeris file. UTC is used in place of dynamical time; the
//! ~70 s difference moves the Moon by well under 0.01 deg.

pub mod lunar;
pub mod solar;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::ports::{CelestialBody, Ephemeris};
use crate::error::EphemerisError;

/// Julian Date of the Unix epoch
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Date of J2000.0
const J2000_JD: f64 = 2_451_545.0;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Julian Date of an instant
pub fn julian_date(at: DateTime<Utc>) -> f64 {
    at.timestamp_millis() as f64 / MILLIS_PER_DAY + UNIX_EPOCH_JD
}

/// Julian centuries since J2000.0
pub fn julian_centuries(at: DateTime<Utc>) -> f64 {
    (julian_date(at) - J2000_JD) / 36525.0
}

/// Ephemeris backed by the Meeus low-precision solar and lunar theories
#[derive(Debug, Clone, Copy, Default)]
pub struct MeeusEphemeris;

impl MeeusEphemeris {
    pub fn new() -> Self {
        Self
    }

    fn longitude_at(&self, body: CelestialBody, t: f64) -> f64 {
        match body {
            CelestialBody::Sun => solar::apparent_longitude(t),
            CelestialBody::Moon => lunar::apparent_longitude(t),
        }
    }
}

#[async_trait]
impl Ephemeris for MeeusEphemeris {
    async fn ecliptic_longitude(
        &self,
        body: CelestialBody,
        at: DateTime<Utc>,
    ) -> Result<f64, EphemerisError> {
        let t = julian_centuries(at);
        let longitude = self.longitude_at(body, t);

        if !longitude.is_finite() {
            return Err(EphemerisError::Computation(format!(
                "{} longitude at {} is not finite",
                body, at
            )));
        }

        tracing::debug!(%body, %at, longitude, "Computed ecliptic longitude");
        Ok(longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn julian_date_of_j2000() {
        let at = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(julian_date(at), J2000_JD);
        assert_eq!(julian_centuries(at), 0.0);
    }

    #[test]
    fn julian_date_of_unix_epoch() {
        let at = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(julian_date(at), UNIX_EPOCH_JD);
    }

    #[tokio::test]
    async fn sun_matches_meeus_example() {
        let at = Utc.with_ymd_and_hms(1992, 10, 13, 0, 0, 0).unwrap();
        let lon = MeeusEphemeris::new()
            .ecliptic_longitude(CelestialBody::Sun, at)
            .await
            .unwrap();
        assert!((lon - 199.90895).abs() < 0.01, "got {lon}");
    }

    #[tokio::test]
    async fn moon_matches_meeus_example() {
        let at = Utc.with_ymd_and_hms(1992, 4, 12, 0, 0, 0).unwrap();
        let lon = MeeusEphemeris::new()
            .ecliptic_longitude(CelestialBody::Moon, at)
            .await
            .unwrap();
        assert!((lon - 133.167265).abs() < 0.05, "got {lon}");
    }

    #[tokio::test]
    async fn longitudes_stay_in_range_over_a_month() {
        let ephemeris = MeeusEphemeris::new();
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        for hours in (0..24 * 30).step_by(7) {
            let at = start + chrono::Duration::hours(hours);
            for body in [CelestialBody::Sun, CelestialBody::Moon] {
                let lon = ephemeris.ecliptic_longitude(body, at).await.unwrap();
                assert!((0.0..360.0).contains(&lon));
            }
        }
    }
}
