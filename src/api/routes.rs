//! API route configuration.
//!
//! Data routes may reach NASA upstreams and are rate limited per client IP by
//! [`crate::routes::app_router`].

use crate::api::handlers::{
    asteroids_today_handler, filter_exoplanets_handler, list_exoplanets_handler,
    research_summary_handler, search_exoplanets_handler, stars_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Read-only data routes.
///
/// # Endpoints
///
/// - `GET /exoplanets`          - Normalized planets (paginated, optional name search)
/// - `GET /exoplanets/search`   - Planets by name substring (`q` required)
/// - `GET /exoplanets/filter`   - Planets within inclusive mass bounds
/// - `GET /stars`               - Distinct host stars
/// - `GET /asteroids/today`     - Near-Earth objects for today's feed window
/// - `GET /research/summary`    - Category histogram and summary statistics
pub fn data_routes() -> Router<AppState> {
    Router::new()
        .route("/exoplanets", get(list_exoplanets_handler))
        .route("/exoplanets/search", get(search_exoplanets_handler))
        .route("/exoplanets/filter", get(filter_exoplanets_handler))
        .route("/stars", get(stars_handler))
        .route("/asteroids/today", get(asteroids_today_handler))
        .route("/research/summary", get(research_summary_handler))
}
