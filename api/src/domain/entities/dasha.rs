//! Vimshottari dasha domain entity
//!
//! Nine lords rule in a fixed cyclic order over a 120-year cycle. The lord
//! ruling at birth comes from the Moon's nakshatra, and the part of that
//! lord's period still owed at birth is proportional to the distance the Moon
//! has left to travel in the nakshatra.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::position::{mansion_offset, MANSION_SPAN};
use super::longitude::FULL_CIRCLE;
use crate::error::DomainError;

/// Fixed-length year used to turn elapsed time into dasha years
pub const DAYS_PER_YEAR: f64 = 365.25;

const MILLIS_PER_YEAR: f64 = DAYS_PER_YEAR * 86_400_000.0;

/// Total length of one Vimshottari cycle
pub const DASHA_CYCLE_YEARS: u32 = 120;

/// A planetary lord and the length of its period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashaLord {
    pub name: &'static str,
    pub years: u32,
}

/// Lords in dasha order. Ashwini, Magha and Mula (nakshatras 0, 9, 18) start
/// at Ketu.
pub const DASHA_LORDS: [DashaLord; 9] = [
    DashaLord { name: "Ketu", years: 7 },
    DashaLord { name: "Venus", years: 20 },
    DashaLord { name: "Sun", years: 6 },
    DashaLord { name: "Moon", years: 10 },
    DashaLord { name: "Mars", years: 7 },
    DashaLord { name: "Rahu", years: 18 },
    DashaLord { name: "Jupiter", years: 16 },
    DashaLord { name: "Saturn", years: 19 },
    DashaLord { name: "Mercury", years: 17 },
];

/// Dasha running at a given moment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaState {
    pub lord: DashaLord,
    /// Years since this period began. `None` while the birth lord's balance
    /// is still running.
    pub started_ago_years: Option<f64>,
    pub ends_in_years: f64,
}

/// Dasha balance owed at birth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthBalance {
    pub mansion_index: usize,
    pub lord_index: usize,
    /// Fraction of the nakshatra already traveled, in [0, 1)
    pub fraction_traveled: f64,
    pub balance_years: f64,
}

impl BirthBalance {
    /// Compute the birth balance from the Moon's sidereal longitude.
    pub fn from_moon(moon_sidereal_degrees: f64) -> Result<Self, DomainError> {
        if !(0.0..FULL_CIRCLE).contains(&moon_sidereal_degrees) {
            return Err(DomainError::IndexOutOfRange(format!(
                "moon longitude {} outside [0, 360)",
                moon_sidereal_degrees
            )));
        }

        let (mansion_index, offset) = mansion_offset(moon_sidereal_degrees);
        let lord_index = mansion_index % DASHA_LORDS.len();
        let fraction_traveled = offset / MANSION_SPAN;
        let balance_years = DASHA_LORDS[lord_index].years as f64 * (1.0 - fraction_traveled);

        Ok(Self {
            mansion_index,
            lord_index,
            fraction_traveled,
            balance_years,
        })
    }

    pub fn lord(&self) -> DashaLord {
        DASHA_LORDS[self.lord_index]
    }

    /// Walk the cycle forward from birth to find the period covering
    /// `age_years`.
    ///
    /// Boundaries are strict: an age landing exactly on the end of a period
    /// belongs to the next lord.
    pub fn dasha_at_age(&self, age_years: f64) -> DashaState {
        if age_years < self.balance_years {
            return DashaState {
                lord: self.lord(),
                started_ago_years: None,
                ends_in_years: self.balance_years - age_years,
            };
        }

        let mut remaining = age_years - self.balance_years;
        let mut index = (self.lord_index + 1) % DASHA_LORDS.len();
        loop {
            let lord = DASHA_LORDS[index];
            let period = lord.years as f64;
            if remaining < period {
                return DashaState {
                    lord,
                    started_ago_years: Some(remaining),
                    ends_in_years: period - remaining,
                };
            }
            remaining -= period;
            index = (index + 1) % DASHA_LORDS.len();
        }
    }
}

/// Elapsed time between two instants in fixed 365.25-day years
pub fn age_in_years(birth: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - birth).num_milliseconds() as f64 / MILLIS_PER_YEAR
}

/// Dasha running at `now` for someone born at `birth` with the Moon at
/// `moon_sidereal_degrees`.
#[allow(dead_code)]
pub fn compute_dasha(
    moon_sidereal_degrees: f64,
    birth: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<DashaState, DomainError> {
    let balance = BirthBalance::from_moon(moon_sidereal_degrees)?;
    Ok(balance.dasha_at_age(age_in_years(birth, now)))
}
