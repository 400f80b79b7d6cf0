//! Low-precision solar longitude
//!
//! Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 25: geometric mean
//! longitude plus the equation of center, corrected for nutation and
//! aberration. Good to about 0.01 deg.

use crate::domain::entities::normalize_degrees;

/// Apparent geocentric tropical longitude of the Sun in degrees [0, 360).
///
/// `t` = Julian centuries since J2000.0.
pub fn apparent_longitude(t: f64) -> f64 {
    let mean_longitude = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let mean_anomaly = (357.52911 + 35999.05029 * t - 0.0001537 * t * t).to_radians();

    let center = (1.914602 - 0.004817 * t - 0.000014 * t * t) * mean_anomaly.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * mean_anomaly).sin()
        + 0.000289 * (3.0 * mean_anomaly).sin();

    let omega = (125.04 - 1934.136 * t).to_radians();
    normalize_degrees(mean_longitude + center - 0.00569 - 0.00478 * omega.sin())
}
