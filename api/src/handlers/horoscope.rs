//! Horoscope handler
//!
//! Sun sign, Moon sign and Moon star for a date.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::optional_param;
use crate::app::timestamp::{display_date, parse_instant};
use crate::error::AppError;
use crate::AppState;

/// Query params for the horoscope endpoint
#[derive(Debug, Deserialize)]
pub struct HoroscopeParams {
    /// `YYYY-MM-DD` or RFC 3339; defaults to now
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HoroscopeResponse {
    pub date: String,
    pub sun_sign: &'static str,
    pub moon_sign: &'static str,
    pub moon_star: &'static str,
}

/// GET /horoscope
pub async fn get_horoscope(
    State(state): State<AppState>,
    Query(params): Query<HoroscopeParams>,
) -> Result<Json<HoroscopeResponse>, AppError> {
    let at = match optional_param(params.date) {
        Some(date) => parse_instant(&date)?,
        None => Utc::now(),
    };

    let horoscope = state.astrology_service.horoscope(at).await?;

    Ok(Json(HoroscopeResponse {
        date: display_date(horoscope.at),
        sun_sign: horoscope.sun.position.sign_name,
        moon_sign: horoscope.moon.position.sign_name,
        moon_star: horoscope.moon.position.mansion_name,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_params_without_date() {
        let params: HoroscopeParams = serde_json::from_str("{}").unwrap();
        assert!(params.date.is_none());
    }

    #[test]
    fn serialize_horoscope_response() {
        let response = HoroscopeResponse {
            date: "Mon Jan 15 2024".to_string(),
            sun_sign: "Makara",
            moon_sign: "Kumbha",
            moon_star: "Shatabhisha",
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["date"], "Mon Jan 15 2024");
        assert_eq!(json["sun_sign"], "Makara");
        assert_eq!(json["moon_sign"], "Kumbha");
        assert_eq!(json["moon_star"], "Shatabhisha");
    }
}
