//! Birth date/time parsing
//!
//! Query strings carry dates as `YYYY-MM-DD` and times as `HH:MM`, both read
//! as UTC. Anything chrono cannot turn into a real instant is rejected here so
//! no NaN-like value ever reaches the calculations.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::error::DomainError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Rendering used for dates in responses, e.g. `Fri May 15 1998`
const DISPLAY_FORMAT: &str = "%a %b %d %Y";

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(date: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
        .map_err(|e| DomainError::InvalidTimestamp(format!("date '{}': {}", date, e)))
}

/// Parse an `HH:MM` wall-clock time.
pub fn parse_time(time: &str) -> Result<NaiveTime, DomainError> {
    NaiveTime::parse_from_str(time.trim(), TIME_FORMAT)
        .map_err(|e| DomainError::InvalidTimestamp(format!("time '{}': {}", time, e)))
}

/// Combine a `YYYY-MM-DD` date and `HH:MM` time into a UTC instant.
pub fn parse_birth_instant(date: &str, time: &str) -> Result<DateTime<Utc>, DomainError> {
    let date = parse_date(date)?;
    let time = parse_time(time)?;
    Ok(date.and_time(time).and_utc())
}

/// Parse either a bare `YYYY-MM-DD` date (midnight UTC) or an RFC 3339
/// timestamp.
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>, DomainError> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DomainError::InvalidTimestamp(format!("'{}': {}", value, e)))
}

/// Human-readable date for responses.
pub fn display_date(at: DateTime<Utc>) -> String {
    at.format(DISPLAY_FORMAT).to_string()
}
