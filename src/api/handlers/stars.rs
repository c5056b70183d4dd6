//! Handler for host star listing.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use validator::Validate;

use crate::api::dto::planets::{DEFAULT_STARS_LIMIT, LimitParams};
use crate::domain::entities::HostStar;
use crate::error::AppError;
use crate::state::AppState;

/// Lists distinct host stars in first-seen order.
///
/// # Endpoint
///
/// `GET /stars?limit=50`
///
/// Stellar mass, radius and temperature are `null` when served from the
/// SQLite mirror.
pub async fn stars_handler(
    State(state): State<AppState>,
    query: Result<Query<LimitParams>, QueryRejection>,
) -> Result<Json<Vec<HostStar>>, AppError> {
    let Query(params) = query?;
    params.validate()?;

    let stars = state
        .exoplanet_service
        .host_stars(params.limit.unwrap_or(DEFAULT_STARS_LIMIT))
        .await?;

    Ok(Json(stars))
}
