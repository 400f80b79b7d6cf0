//! Lunar longitude from the principal periodic terms
//!
//! Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 47. Only the largest
//! terms of Table 47.A are kept (every omitted term is under 0.002 deg), which
//! keeps the result within a few hundredths of a degree.

use crate::domain::entities::normalize_degrees;

/// Longitude terms: multiples of D, M, M', F and the sine amplitude in
/// millionths of a degree.
#[rustfmt::skip]
static LONGITUDE_TERMS: [(i8, i8, i8, i8, i32); 34] = [
    // D   M   M'  F   amplitude (1e-6 deg)
    (0,  0,  1,  0,  6_288_774),
    (2,  0, -1,  0,  1_274_027),
    (2,  0,  0,  0,    658_314),
    (0,  0,  2,  0,    213_618),
    (0,  1,  0,  0,   -185_116),
    (0,  0,  0,  2,   -114_332),
    (2,  0, -2,  0,     58_793),
    (2, -1, -1,  0,     57_066),
    (2,  0,  1,  0,     53_322),
    (2, -1,  0,  0,     45_758),
    (0,  1, -1,  0,    -40_923),
    (1,  0,  0,  0,    -34_720),
    (0,  1,  1,  0,    -30_383),
    (2,  0,  0, -2,     15_327),
    (0,  0,  1,  2,    -12_528),
    (0,  0,  1, -2,     10_980),
    (4,  0, -1,  0,     10_675),
    (0,  0,  3,  0,     10_034),
    (4,  0, -2,  0,      8_548),
    (2,  1, -1,  0,     -7_888),
    (2,  1,  0,  0,     -6_766),
    (1,  0, -1,  0,     -5_163),
    (1,  1,  0,  0,      4_987),
    (2, -1,  1,  0,      4_036),
    (2,  0,  2,  0,      3_994),
    (4,  0,  0,  0,      3_861),
    (2,  0, -3,  0,      3_665),
    (0,  1, -2,  0,     -2_689),
    (2,  0, -1,  2,     -2_602),
    (2, -1, -2,  0,      2_390),
    (1,  0,  1,  0,     -2_348),
    (2, -2,  0,  0,      2_236),
    (0,  1,  2,  0,     -2_120),
    (0,  2,  0,  0,     -2_069),
];

/// Mean longitude and the four fundamental arguments (D, M, M', F) in degrees
fn fundamental_arguments(t: f64) -> (f64, [f64; 4]) {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let mean_longitude =
        218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538841.0 - t4 / 65194000.0;
    let elongation =
        297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545868.0 - t4 / 113065000.0;
    let sun_anomaly = 357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24490000.0;
    let moon_anomaly =
        134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69699.0 - t4 / 14712000.0;
    let latitude_argument =
        93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3526000.0 + t4 / 863310000.0;

    (
        mean_longitude,
        [elongation, sun_anomaly, moon_anomaly, latitude_argument],
    )
}

/// Nutation in longitude in degrees (Meeus ch. 22, low-precision series)
pub fn nutation_in_longitude(t: f64) -> f64 {
    let omega = (125.04452 - 1934.136261 * t).to_radians();
    let sun_mean = (280.4665 + 36000.7698 * t).to_radians();
    let moon_mean = (218.3165 + 481267.8813 * t).to_radians();

    let arcsec = -17.20 * omega.sin() - 1.32 * (2.0 * sun_mean).sin()
        - 0.23 * (2.0 * moon_mean).sin()
        + 0.21 * (2.0 * omega).sin();
    arcsec / 3600.0
}

/// Geometric (mean-equinox) longitude of the Moon in degrees [0, 360).
pub fn geometric_longitude(t: f64) -> f64 {
    let (mean_longitude, [d, m, mp, f]) = fundamental_arguments(t);

    // Terms in M are scaled by the decreasing eccentricity of Earth's orbit
    let eccentricity = 1.0 - 0.002516 * t - 0.0000074 * t * t;

    let mut sum = 0.0_f64;
    for &(nd, nm, nmp, nf, amplitude) in &LONGITUDE_TERMS {
        let angle = (nd as f64 * d + nm as f64 * m + nmp as f64 * mp + nf as f64 * f).to_radians();
        let scale = match nm.abs() {
            1 => eccentricity,
            2 => eccentricity * eccentricity,
            _ => 1.0,
        };
        sum += amplitude as f64 * scale * angle.sin();
    }

    // Venus, Jupiter and Earth-flattening corrections
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479264.290 * t).to_radians();
    sum += 3958.0 * a1.sin()
        + 1962.0 * (mean_longitude - f).to_radians().sin()
        + 318.0 * a2.sin();

    normalize_degrees(mean_longitude + sum / 1_000_000.0)
}

/// Apparent geocentric tropical longitude of the Moon in degrees [0, 360).
pub fn apparent_longitude(t: f64) -> f64 {
    normalize_degrees(geometric_longitude(t) + nutation_in_longitude(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_47A_T: f64 = -0.077221081451;

    #[test]
    fn meeus_example_47a_fundamental_arguments() {
        let (l, [d, m, mp, f]) = fundamental_arguments(EXAMPLE_47A_T);
        assert!((normalize_degrees(l) - 134.290182).abs() < 1e-5);
        assert!((normalize_degrees(d) - 113.842304).abs() < 1e-5);
        assert!((normalize_degrees(m) - 97.643514).abs() < 1e-5);
        assert!((normalize_degrees(mp) - 5.150833).abs() < 1e-5);
        assert!((normalize_degrees(f) - 219.889721).abs() < 1e-5);
    }

    #[test]
    fn meeus_example_47a_longitude() {
        // 1992 April 12.0 TD -> geometric 133.162655, apparent 133.167265
        let lon = geometric_longitude(EXAMPLE_47A_T);
        assert!((lon - 133.162655).abs() < 0.05, "got {lon}");

        let apparent = apparent_longitude(EXAMPLE_47A_T);
        assert!((apparent - 133.167265).abs() < 0.05, "got {apparent}");
    }

    #[test]
    fn nutation_stays_small() {
        for &t in &[-1.0, -0.1, 0.0, 0.24, 1.0] {
            assert!(nutation_in_longitude(t).abs() < 0.006);
        }
    }

    #[test]
    fn moves_about_thirteen_degrees_per_day() {
        let t0 = 0.1;
        let t1 = t0 + 1.0 / 36525.0;
        let mut delta = apparent_longitude(t1) - apparent_longitude(t0);
        if delta < 0.0 {
            delta += 360.0;
        }
        assert!((11.5..15.5).contains(&delta), "got {delta}");
    }
}
