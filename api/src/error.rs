//! Unified error types for the Graha API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core calculation and input-contract errors
//! - `EphemerisError`: Ephemeris adapter errors
//! - `AppError`: Application layer errors (wraps the above for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure calculation errors
#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    /// A table lookup fell outside its range. Inputs are normalized before
    /// they reach the core, so this signals a broken caller contract.
    #[error("Index out of range: {0}")]
    IndexOutOfRange(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Ephemeris lookup errors
#[derive(Debug, Error)]
pub enum EphemerisError {
    #[error("Unsupported body: {0}")]
    UnsupportedBody(String),

    #[error("Computation failed: {0}")]
    Computation(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Ephemeris error: {0}")]
    Ephemeris(#[from] EphemerisError),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(DomainError::InvalidTimestamp(msg)) => {
                (StatusCode::BAD_REQUEST, "Invalid Date", Some(msg.clone()))
            }
            AppError::Domain(DomainError::MissingRequiredField(msg)) => (
                StatusCode::BAD_REQUEST,
                "Missing required field",
                Some(msg.clone()),
            ),
            AppError::Domain(DomainError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(msg.clone()),
            ),
            AppError::Domain(DomainError::IndexOutOfRange(msg)) => {
                tracing::error!("Index out of range: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Ephemeris(e) => {
                tracing::error!("Ephemeris error: {}", e);
                (StatusCode::BAD_GATEWAY, "Ephemeris service error", None)
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
