//! Dasha handler
//!
//! Usage: `/dasha?date=1998-05-15&time=14:30`

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{optional_param, required_param};
use crate::app::timestamp::{display_date, parse_birth_instant};
use crate::domain::entities::DashaState;
use crate::error::AppError;
use crate::AppState;

/// Query params for the dasha endpoint
#[derive(Debug, Deserialize)]
pub struct DashaParams {
    /// Birth date, `YYYY-MM-DD` (required)
    pub date: Option<String>,
    /// Birth time, `HH:MM` UTC
    pub time: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DashaResponse {
    pub birth_date: String,
    pub birth_star: &'static str,
    pub current_status: CurrentStatus,
}

#[derive(Debug, Serialize)]
pub struct CurrentStatus {
    pub running_dasha: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_ago: Option<String>,
    pub time_remaining: String,
}

impl From<&DashaState> for CurrentStatus {
    fn from(state: &DashaState) -> Self {
        Self {
            running_dasha: state.lord.name,
            started_ago: state.started_ago_years.map(format_years),
            time_remaining: format_years(state.ends_in_years),
        }
    }
}

fn format_years(years: f64) -> String {
    format!("{:.2} years", years)
}

/// GET /dasha
pub async fn get_dasha(
    State(state): State<AppState>,
    Query(params): Query<DashaParams>,
) -> Result<Json<DashaResponse>, AppError> {
    let date = required_param(params.date, "Please provide ?date=YYYY-MM-DD")?;
    let time =
        optional_param(params.time).unwrap_or_else(|| state.config.default_birth_time.clone());
    let birth = parse_birth_instant(&date, &time)?;

    let dasha = state.astrology_service.dasha(birth, Utc::now()).await?;

    Ok(Json(DashaResponse {
        birth_date: display_date(dasha.birth),
        birth_star: dasha.moon.position.mansion_name,
        current_status: CurrentStatus::from(&dasha.current),
    }))
}
