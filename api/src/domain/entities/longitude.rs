//! Celestial longitude helpers
//!
//! The ephemeris reports tropical (Western) longitudes. Every Vedic placement
//! is computed from the sidereal longitude, which is the tropical one shifted
//! back by a fixed ayanamsa.

use serde::Serialize;

use crate::error::DomainError;

/// Degrees in a full circle of ecliptic longitude
pub const FULL_CIRCLE: f64 = 360.0;

/// Default ayanamsa in degrees (approximate Lahiri value).
///
/// Fixed for all epochs; there is no time-varying precession model.
pub const DEFAULT_AYANAMSA: f64 = 24.12;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_degrees(deg: f64) -> f64 {
    let r = deg % FULL_CIRCLE;
    let r = if r < 0.0 { r + FULL_CIRCLE } else { r };
    // Tiny negative remainders round up to exactly 360.0
    if r >= FULL_CIRCLE {
        0.0
    } else {
        r
    }
}

/// Offset between tropical and sidereal longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ayanamsa(f64);

impl Ayanamsa {
    pub fn new(degrees: f64) -> Result<Self, DomainError> {
        if !degrees.is_finite() {
            return Err(DomainError::Validation(format!(
                "ayanamsa must be a finite number of degrees, got {}",
                degrees
            )));
        }
        Ok(Self(degrees))
    }

    pub fn degrees(self) -> f64 {
        self.0
    }

    /// Convert a tropical longitude into a sidereal one in [0, 360).
    pub fn to_sidereal(self, tropical_degrees: f64) -> f64 {
        normalize_degrees(normalize_degrees(tropical_degrees) - self.0)
    }
}

impl Default for Ayanamsa {
    fn default() -> Self {
        Self(DEFAULT_AYANAMSA)
    }
}

/// Convert a tropical longitude to sidereal using the default ayanamsa.
#[allow(dead_code)]
pub fn to_sidereal(tropical_degrees: f64) -> f64 {
    Ayanamsa::default().to_sidereal(tropical_degrees)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_wraps_negative_and_large_values() {
        assert!((normalize_degrees(-10.0) - 350.0).abs() < 1e-12);
        assert!((normalize_degrees(730.0) - 10.0).abs() < 1e-12);
        assert_eq!(normalize_degrees(360.0), 0.0);
    }

    #[test]
    fn normalize_never_returns_full_circle() {
        assert_eq!(normalize_degrees(-1e-20), 0.0);
    }

    #[test]
    fn sidereal_subtracts_ayanamsa() {
        assert!((to_sidereal(100.0) - 75.88).abs() < 1e-9);
    }

    #[test]
    fn sidereal_wraps_below_zero() {
        // 10 - 24.12 = -14.12 -> 345.88
        assert!((to_sidereal(10.0) - 345.88).abs() < 1e-9);
    }

    #[test]
    fn sidereal_always_in_range() {
        let mut d = -1080.0;
        while d <= 1080.0 {
            let s = to_sidereal(d);
            assert!((0.0..FULL_CIRCLE).contains(&s), "{} -> {}", d, s);
            d += 0.37;
        }
        for d in [
            f64::MIN_POSITIVE,
            -f64::MIN_POSITIVE,
            DEFAULT_AYANAMSA,
            -DEFAULT_AYANAMSA,
            359.999_999_999,
        ] {
            let s = to_sidereal(d);
            assert!((0.0..FULL_CIRCLE).contains(&s), "{} -> {}", d, s);
        }
    }

    #[test]
    fn sidereal_at_ayanamsa_is_zero() {
        assert_eq!(to_sidereal(DEFAULT_AYANAMSA), 0.0);
    }

    #[test]
    fn custom_ayanamsa() {
        let ayanamsa = Ayanamsa::new(23.853).unwrap();
        assert!((ayanamsa.to_sidereal(30.0) - 6.147).abs() < 1e-9);
    }

    #[test]
    fn ayanamsa_rejects_nan() {
        assert!(Ayanamsa::new(f64::NAN).is_err());
        assert!(Ayanamsa::new(f64::INFINITY).is_err());
    }
}
