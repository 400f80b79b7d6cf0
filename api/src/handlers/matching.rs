//! Match-making handler
//!
//! Usage: `/match?b_date=1995-10-10&g_date=1998-05-15`

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::{optional_param, required_param};
use crate::app::timestamp::parse_birth_instant;
use crate::app::Placement;
use crate::domain::entities::compatibility::SCORE_SCALE;
use crate::domain::entities::{CompatibilityResult, CompatibilityStatus};
use crate::error::AppError;
use crate::AppState;

const MISSING_DATES_HINT: &str =
    "Please provide birth dates: ?b_date=YYYY-MM-DD&g_date=YYYY-MM-DD";

/// Birth time assumed when a match query gives only dates
const MATCH_DEFAULT_TIME: &str = "00:00";

/// Query params for the match endpoint
#[derive(Debug, Deserialize)]
pub struct MatchParams {
    pub b_date: Option<String>,
    pub g_date: Option<String>,
    pub b_time: Option<String>,
    pub g_time: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChartSummary {
    pub star: &'static str,
    pub rasi: &'static str,
}

impl From<&Placement> for ChartSummary {
    fn from(p: &Placement) -> Self {
        Self {
            star: p.position.mansion_name,
            rasi: p.position.sign_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CompatibilitySummary {
    /// e.g. `"6/10"`
    pub score: String,
    pub status: CompatibilityStatus,
    pub count_from_girl: u8,
}

impl From<&CompatibilityResult> for CompatibilitySummary {
    fn from(result: &CompatibilityResult) -> Self {
        Self {
            score: format!("{}/{}", result.score, SCORE_SCALE),
            status: result.status,
            count_from_girl: result.count_from_girl,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub boy: ChartSummary,
    pub girl: ChartSummary,
    pub compatibility: CompatibilitySummary,
}

/// GET /match
pub async fn get_match(
    State(state): State<AppState>,
    Query(params): Query<MatchParams>,
) -> Result<Json<MatchResponse>, AppError> {
    let b_date = required_param(params.b_date, MISSING_DATES_HINT)?;
    let g_date = required_param(params.g_date, MISSING_DATES_HINT)?;

    let boy_birth = parse_birth_instant(
        &b_date,
        &optional_param(params.b_time).unwrap_or_else(|| MATCH_DEFAULT_TIME.to_string()),
    )?;
    let girl_birth = parse_birth_instant(
        &g_date,
        &optional_param(params.g_time).unwrap_or_else(|| MATCH_DEFAULT_TIME.to_string()),
    )?;

    let report = state
        .astrology_service
        .match_charts(boy_birth, girl_birth)
        .await?;

    Ok(Json(MatchResponse {
        boy: ChartSummary::from(&report.boy),
        girl: ChartSummary::from(&report.girl),
        compatibility: CompatibilitySummary::from(&report.compatibility),
    }))
}
