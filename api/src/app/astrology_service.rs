//! Astrology service
//!
//! Orchestrates the pipeline for every endpoint: ephemeris lookup, sidereal
//! conversion, placement, then dasha or compatibility. Stateless apart from
//! the ayanamsa fixed at startup.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::{
    compute_compatibility, dasha, resolve_position, Ayanamsa, BirthBalance, CompatibilityResult,
    DashaState, MansionPosition,
};
use crate::domain::ports::{CelestialBody, Ephemeris};
use crate::error::{AppError, EphemerisError};

/// A body's placement at an instant
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub sidereal_longitude: f64,
    pub position: MansionPosition,
}

/// Sun and Moon placements at an instant
#[derive(Debug, Clone)]
pub struct Horoscope {
    pub at: DateTime<Utc>,
    pub sun: Placement,
    pub moon: Placement,
}

/// Birth Moon and the dasha running at a given moment
#[derive(Debug, Clone)]
pub struct BirthDasha {
    pub birth: DateTime<Utc>,
    pub moon: Placement,
    pub balance: BirthBalance,
    pub current: DashaState,
}

/// Both charts and their compatibility
#[derive(Debug, Clone)]
pub struct MatchReport {
    pub boy: Placement,
    pub girl: Placement,
    pub compatibility: CompatibilityResult,
}

/// Service computing placements, dashas and matches
pub struct AstrologyService<E>
where
    E: Ephemeris,
{
    ephemeris: Arc<E>,
    ayanamsa: Ayanamsa,
}

impl<E> AstrologyService<E>
where
    E: Ephemeris,
{
    pub fn new(ephemeris: Arc<E>, ayanamsa: Ayanamsa) -> Self {
        Self {
            ephemeris,
            ayanamsa,
        }
    }

    pub fn ayanamsa(&self) -> Ayanamsa {
        self.ayanamsa
    }

    /// Look up a body and place it in the sidereal zodiac.
    pub async fn placement(
        &self,
        body: CelestialBody,
        at: DateTime<Utc>,
    ) -> Result<Placement, AppError> {
        let tropical = self.ephemeris.ecliptic_longitude(body, at).await?;
        if !tropical.is_finite() {
            return Err(EphemerisError::Computation(format!(
                "{} longitude at {} is not finite",
                body, at
            ))
            .into());
        }

        let sidereal_longitude = self.ayanamsa.to_sidereal(tropical);
        let position = resolve_position(sidereal_longitude)?;

        tracing::debug!(
            %body,
            %at,
            tropical,
            sidereal = sidereal_longitude,
            star = position.mansion_name,
            rasi = position.sign_name,
            "Resolved placement"
        );

        Ok(Placement {
            sidereal_longitude,
            position,
        })
    }

    /// Sun and Moon placements at `at`
    pub async fn horoscope(&self, at: DateTime<Utc>) -> Result<Horoscope, AppError> {
        let (sun, moon) = tokio::try_join!(
            self.placement(CelestialBody::Sun, at),
            self.placement(CelestialBody::Moon, at),
        )?;
        Ok(Horoscope { at, sun, moon })
    }

    /// Dasha running at `now` for a birth at `birth`
    pub async fn dasha(
        &self,
        birth: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<BirthDasha, AppError> {
        let moon = self.placement(CelestialBody::Moon, birth).await?;
        let balance = BirthBalance::from_moon(moon.sidereal_longitude)?;
        let current = balance.dasha_at_age(dasha::age_in_years(birth, now));

        tracing::debug!(
            birth_lord = balance.lord().name,
            balance_years = balance.balance_years,
            running = current.lord.name,
            "Computed dasha"
        );

        Ok(BirthDasha {
            birth,
            moon,
            balance,
            current,
        })
    }

    /// Score a boy and girl from their birth instants
    pub async fn match_charts(
        &self,
        boy_birth: DateTime<Utc>,
        girl_birth: DateTime<Utc>,
    ) -> Result<MatchReport, AppError> {
        let (boy, girl) = tokio::try_join!(
            self.placement(CelestialBody::Moon, boy_birth),
            self.placement(CelestialBody::Moon, girl_birth),
        )?;

        let compatibility = compute_compatibility(
            boy.position.mansion_index,
            girl.position.mansion_index,
            boy.position.sign_index,
            girl.position.sign_index,
        )?;

        tracing::debug!(
            score = compatibility.score,
            status = %compatibility.status,
            count_from_girl = compatibility.count_from_girl,
            "Scored match"
        );

        Ok(MatchReport {
            boy,
            girl,
            compatibility,
        })
    }
}
