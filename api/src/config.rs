use std::env;

use anyhow::Context;

use crate::app::timestamp::parse_time;
use crate::domain::entities::{longitude::DEFAULT_AYANAMSA, Ayanamsa};

/// Birth time assumed by `/dasha` when the query omits one
pub const DEFAULT_BIRTH_TIME: &str = "12:00";

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    /// Tropical-to-sidereal offset, fixed for the life of the process
    pub ayanamsa: Ayanamsa,
    /// `HH:MM` used when `/dasha` has no `time` parameter
    pub default_birth_time: String,
    /// Sustained requests per second allowed per client IP
    pub rate_limit_per_second: u64,
    /// Burst size allowed per client IP
    pub rate_limit_burst: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let ayanamsa_degrees = match env::var("AYANAMSA_DEGREES") {
            Ok(raw) => raw
                .parse::<f64>()
                .with_context(|| format!("AYANAMSA_DEGREES is not a number: {}", raw))?,
            Err(_) => DEFAULT_AYANAMSA,
        };

        let default_birth_time =
            env::var("DEFAULT_BIRTH_TIME").unwrap_or_else(|_| DEFAULT_BIRTH_TIME.to_string());
        parse_time(&default_birth_time).context("DEFAULT_BIRTH_TIME must be HH:MM")?;

        Ok(Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            ayanamsa: Ayanamsa::new(ayanamsa_degrees)?,
            default_birth_time,
            rate_limit_per_second: env::var("RATE_LIMIT_PER_SECOND")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2),
            rate_limit_burst: env::var("RATE_LIMIT_BURST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            ayanamsa: Ayanamsa::default(),
            default_birth_time: DEFAULT_BIRTH_TIME.to_string(),
            rate_limit_per_second: 2,
            rate_limit_burst: 5,
        }
    }
}
