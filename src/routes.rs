//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /`        - Status banner (public)
//! - `GET /health`  - Health check: planet source, NEO feed (public)
//! - data routes    - See [`crate::api::routes::data_routes`] (rate limited)
//! - anything else  - JSON `not_found` envelope
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on data routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, not_found_handler, root_handler};
use crate::api::middleware::{rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;
use anyhow::Result;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// The router must be served with connect info so the rate limiter can key
/// on the peer address.
///
/// # Errors
///
/// Returns an error if the rate limit settings are zero.
pub fn app_router(state: AppState, config: &Config) -> Result<NormalizePath<Router>> {
    let data_router = api::routes::data_routes().layer(rate_limit::layer(
        config.rate_limit_per_second,
        config.rate_limit_burst,
    )?);

    let router = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .merge(data_router)
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
