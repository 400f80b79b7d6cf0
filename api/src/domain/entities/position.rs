//! Mansion and sign placement
//!
//! The ecliptic is split into 12 rasis of 30 degrees and 27 nakshatras of
//! 13 deg 20' each. Every nakshatra has four quarters (padas) of 3 deg 20'.

use serde::Serialize;

use super::longitude::FULL_CIRCLE;
use crate::error::DomainError;

/// Span of one nakshatra: 360/27 = 13.3333... degrees
pub const MANSION_SPAN: f64 = FULL_CIRCLE / 27.0;

/// Span of one nakshatra quarter: 3.3333... degrees
pub const QUARTER_SPAN: f64 = MANSION_SPAN / 4.0;

/// Span of one rasi
pub const SIGN_SPAN: f64 = 30.0;

pub const MANSION_COUNT: usize = 27;
pub const SIGN_COUNT: usize = 12;

/// Nakshatras in order from 0 deg sidereal
pub const MANSION_NAMES: [&str; MANSION_COUNT] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashira",
    "Ardra",
    "Punarvasu",
    "Pushya",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Mula",
    "Purva Ashadha",
    "Uttara Ashadha",
    "Shravana",
    "Dhanishta",
    "Shatabhisha",
    "Purva Bhadrapada",
    "Uttara Bhadrapada",
    "Revati",
];

/// Rasis in order from 0 deg sidereal
pub const SIGN_NAMES: [&str; SIGN_COUNT] = [
    "Mesha",
    "Rishaba",
    "Mithuna",
    "Kataka",
    "Simha",
    "Kanya",
    "Thula",
    "Vrischika",
    "Dhanusu",
    "Makara",
    "Kumbha",
    "Meena",
];

/// Where a sidereal longitude falls in the mansion and sign grids
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MansionPosition {
    pub mansion_index: usize,
    pub mansion_name: &'static str,
    /// 1..=4
    pub quarter: u8,
    pub sign_index: usize,
    pub sign_name: &'static str,
}

/// Name of the nakshatra at `index`
pub fn mansion_name(index: usize) -> Result<&'static str, DomainError> {
    MANSION_NAMES
        .get(index)
        .copied()
        .ok_or_else(|| DomainError::IndexOutOfRange(format!("mansion index {}", index)))
}

/// Name of the rasi at `index`
pub fn sign_name(index: usize) -> Result<&'static str, DomainError> {
    SIGN_NAMES
        .get(index)
        .copied()
        .ok_or_else(|| DomainError::IndexOutOfRange(format!("sign index {}", index)))
}

/// Nakshatra index of a sidereal longitude and the degrees already traveled
/// into that nakshatra.
///
/// The offset is measured from the nakshatra's start rather than taken as
/// `degrees % MANSION_SPAN`, so index and offset never disagree at a boundary.
pub fn mansion_offset(sidereal_degrees: f64) -> (usize, f64) {
    let index = ((sidereal_degrees / MANSION_SPAN).floor() as usize).min(MANSION_COUNT - 1);
    let offset = (sidereal_degrees - index as f64 * MANSION_SPAN).clamp(0.0, MANSION_SPAN);
    (index, offset)
}

/// Resolve a sidereal longitude into its mansion, quarter and sign.
///
/// The caller normalizes; anything outside [0, 360) is rejected rather than
/// wrapped.
pub fn resolve_position(sidereal_degrees: f64) -> Result<MansionPosition, DomainError> {
    if !(0.0..FULL_CIRCLE).contains(&sidereal_degrees) {
        return Err(DomainError::IndexOutOfRange(format!(
            "sidereal longitude {} outside [0, 360)",
            sidereal_degrees
        )));
    }

    let (mansion_index, offset) = mansion_offset(sidereal_degrees);
    let quarter = ((offset / QUARTER_SPAN).floor() as u8).min(3) + 1;
    let sign_index = (sidereal_degrees / SIGN_SPAN).floor() as usize;

    Ok(MansionPosition {
        mansion_index,
        mansion_name: mansion_name(mansion_index)?,
        quarter,
        sign_index,
        sign_name: sign_name(sign_index)?,
    })
}
