//! Porutham (match-making) scoring
//!
//! A simplified three-rule score out of 10:
//! - Dina: distance in nakshatras from the girl's star to the boy's
//! - Rasi: distance in signs from the girl's rasi to the boy's
//! - Rajju: a fixed baseline standing in for the full group table

use serde::Serialize;

use super::position::{MANSION_COUNT, SIGN_COUNT};
use crate::error::DomainError;

/// Nakshatra counts (girl to boy, 1-based) that earn the Dina points
pub const FAVORABLE_MANSION_COUNTS: [u8; 12] = [2, 4, 6, 8, 9, 11, 13, 15, 18, 20, 24, 26];

/// Sign counts that earn the smaller Rasi bonus
pub const FRIENDLY_SIGN_COUNTS: [u8; 4] = [3, 4, 10, 11];

/// Sign counts (6th/8th) that cost a point
pub const HOSTILE_SIGN_COUNTS: [u8; 2] = [6, 8];

/// Seventh-sign (opposition) count
pub const OPPOSITION_SIGN_COUNT: u8 = 7;

pub const DINA_POINTS: i32 = 3;
pub const OPPOSITION_POINTS: i32 = 4;
pub const FRIENDLY_SIGN_POINTS: i32 = 2;
pub const HOSTILE_SIGN_POINTS: i32 = -1;

/// Flat Rajju award; the full same-group table is not evaluated
pub const RAJJU_BASELINE_POINTS: i32 = 3;

/// Nominal scale the score is reported against
pub const SCORE_SCALE: i32 = 10;

/// Score at or above which a match is Excellent
pub const EXCELLENT_THRESHOLD: i32 = 7;

/// Score below which a match is Poor
pub const POOR_THRESHOLD: i32 = 4;

/// Overall match verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompatibilityStatus {
    Poor,
    Average,
    Excellent,
}

impl CompatibilityStatus {
    pub fn from_score(score: i32) -> Self {
        if score >= EXCELLENT_THRESHOLD {
            CompatibilityStatus::Excellent
        } else if score < POOR_THRESHOLD {
            CompatibilityStatus::Poor
        } else {
            CompatibilityStatus::Average
        }
    }
}

impl std::fmt::Display for CompatibilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompatibilityStatus::Poor => write!(f, "Poor"),
            CompatibilityStatus::Average => write!(f, "Average"),
            CompatibilityStatus::Excellent => write!(f, "Excellent"),
        }
    }
}

/// Outcome of scoring a pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityResult {
    /// Unclamped sum of all rule points
    pub score: i32,
    pub status: CompatibilityStatus,
    /// Dina count, 1..=27
    pub count_from_girl: u8,
}

/// 1-based count from `from` to `to` on a circle of `size` positions
fn count_between(to: usize, from: usize, size: usize) -> u8 {
    ((to as i64 - from as i64).rem_euclid(size as i64) + 1) as u8
}

fn check_index(kind: &str, index: usize, count: usize) -> Result<(), DomainError> {
    if index >= count {
        return Err(DomainError::IndexOutOfRange(format!(
            "{} index {} (expected < {})",
            kind, index, count
        )));
    }
    Ok(())
}

/// Points from the Rasi rule for a 1-based sign count
pub fn sign_count_points(rasi_count: u8) -> i32 {
    if rasi_count == OPPOSITION_SIGN_COUNT {
        OPPOSITION_POINTS
    } else if FRIENDLY_SIGN_COUNTS.contains(&rasi_count) {
        FRIENDLY_SIGN_POINTS
    } else if HOSTILE_SIGN_COUNTS.contains(&rasi_count) {
        HOSTILE_SIGN_POINTS
    } else {
        0
    }
}

/// Score a pair from their Moon nakshatra and rasi indices.
pub fn compute_compatibility(
    boy_mansion: usize,
    girl_mansion: usize,
    boy_sign: usize,
    girl_sign: usize,
) -> Result<CompatibilityResult, DomainError> {
    check_index("boy mansion", boy_mansion, MANSION_COUNT)?;
    check_index("girl mansion", girl_mansion, MANSION_COUNT)?;
    check_index("boy sign", boy_sign, SIGN_COUNT)?;
    check_index("girl sign", girl_sign, SIGN_COUNT)?;

    let mut score = 0;

    let count = count_between(boy_mansion, girl_mansion, MANSION_COUNT);
    if FAVORABLE_MANSION_COUNTS.contains(&count) {
        score += DINA_POINTS;
    }

    let rasi_count = count_between(boy_sign, girl_sign, SIGN_COUNT);
    score += sign_count_points(rasi_count);

    score += RAJJU_BASELINE_POINTS;

    Ok(CompatibilityResult {
        score,
        status: CompatibilityStatus::from_score(score),
        count_from_girl: count,
    })
}
