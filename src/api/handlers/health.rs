//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Planet source usable (the NEO feed may be disabled)
/// - **503 Service Unavailable**: Planet source unusable
///
/// # Components Checked
///
/// 1. **Planet source**: Live archive configuration and cache usage, or SQLite
///    mirror readability
/// 2. **NEO feed**: API key presence and cache usage. Never contacts NASA.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "source": "live",
///   "checks": {
///     "planet_source": {
///       "status": "ok",
///       "message": "Live archive https://exoplanetarchive.ipac.caltech.edu/TAP/sync, 1/32 catalogs cached"
///     },
///     "neo_feed": {
///       "status": "disabled",
///       "message": "NASA_API_KEY is not set"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let source_check = check_planet_source(&state).await;
    let feed_check = check_neo_feed(&state);

    let healthy = !source_check.is_failing() && !feed_check.is_failing();

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        source: state.exoplanet_service.source_name().to_string(),
        checks: HealthChecks {
            planet_source: source_check,
            neo_feed: feed_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_planet_source(state: &AppState) -> CheckStatus {
    match state.exoplanet_service.source_status().await {
        Ok(message) => CheckStatus::ok(message),
        Err(e) => CheckStatus::error(format!("Planet source error: {}", e)),
    }
}

fn check_neo_feed(state: &AppState) -> CheckStatus {
    let service = &state.asteroid_service;
    if !service.is_configured() {
        return CheckStatus::disabled("NASA_API_KEY is not set");
    }
    let (cached, capacity) = service.cache_usage();
    CheckStatus::ok(format!("API key configured, {}/{} feeds cached", cached, capacity))
}
