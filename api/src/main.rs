//! Graha API Server
//!
//! A stateless HTTP JSON service for Vedic (sidereal) astrology: Sun and Moon
//! signs, the running Vimshottari dasha, and Moon-star match scoring.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::MeeusEphemeris;
use app::AstrologyService;
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub astrology_service: Arc<AstrologyService<MeeusEphemeris>>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let ephemeris = Arc::new(MeeusEphemeris::new());
        let astrology_service = Arc::new(AstrologyService::new(ephemeris, config.ayanamsa));
        Self {
            astrology_service,
            config,
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn root() -> &'static str {
    "Graha API is live! endpoints: /horoscope, /dasha, /match"
}

/// All routes with tracing and CORS. Rate limiting is added in `main`
/// because it keys on the peer address.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/horoscope", get(handlers::get_horoscope))
        .route("/dasha", get(handlers::get_dasha))
        .route("/match", get(handlers::get_match))
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,graha_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Graha API...");

    let config = Config::from_env()?;
    let state = AppState::new(config.clone());
    tracing::info!(
        ayanamsa = state.astrology_service.ayanamsa().degrees(),
        default_birth_time = %config.default_birth_time,
        "Using built-in Meeus ephemeris"
    );

    // Uses PeerIpKeyExtractor to get client IP from socket connection
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(config.rate_limit_per_second)
            .burst_size(config.rate_limit_burst)
            .finish()
            .context("invalid rate limit settings")?,
    );

    let app = build_router(state).layer(GovernorLayer {
        config: governor_config,
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("server error")?;

    Ok(())
}
