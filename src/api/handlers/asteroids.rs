//! Handler for today's near-Earth objects.

use axum::{Json, extract::State};

use crate::domain::entities::NearEarthObject;
use crate::error::AppError;
use crate::state::AppState;

/// Returns near-Earth objects approaching in the feed window starting today.
///
/// # Endpoint
///
/// `GET /asteroids/today`
///
/// # Errors
///
/// - 500 `configuration_error` when `NASA_API_KEY` is not set (no request is made)
/// - 502 when the feed is unreachable after all retries
pub async fn asteroids_today_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<NearEarthObject>>, AppError> {
    let objects = state.asteroid_service.today().await?;
    Ok(Json(objects))
}
