//! Handler for research summary statistics.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use validator::Validate;

use crate::api::dto::planets::{DEFAULT_SUMMARY_LIMIT, LimitParams};
use crate::domain::entities::SummaryStatistics;
use crate::error::AppError;
use crate::state::AppState;

/// Summarizes the first `limit` planets.
///
/// # Endpoint
///
/// `GET /research/summary?limit=20`
///
/// # Response
///
/// ```json
/// {
///   "total": 3,
///   "categories": { "Rocky": 2, "Gas Giant": 1 },
///   "average_radius": 4.27,
///   "most_common_method": "Transit",
///   "latest_year": 2020
/// }
/// ```
pub async fn research_summary_handler(
    State(state): State<AppState>,
    query: Result<Query<LimitParams>, QueryRejection>,
) -> Result<Json<SummaryStatistics>, AppError> {
    let Query(params) = query?;
    params.validate()?;

    let summary = state
        .exoplanet_service
        .summary(params.limit.unwrap_or(DEFAULT_SUMMARY_LIMIT))
        .await?;

    Ok(Json(summary))
}
