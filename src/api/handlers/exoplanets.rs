//! Handlers for exoplanet listing, search and mass filtering.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use validator::Validate;

use crate::api::dto::planets::{
    DEFAULT_FILTER_LIMIT, DEFAULT_LIST_LIMIT, ListParams, MassFilterParams, SearchParams,
};
use crate::domain::entities::CanonicalPlanet;
use crate::error::AppError;
use crate::state::AppState;

/// Lists normalized planets in archive order.
///
/// # Endpoint
///
/// `GET /exoplanets`
///
/// # Query Parameters
///
/// - `limit` (optional): 1 to 200 (default: 50)
/// - `offset` (optional): Planets to skip, at most 1000 (default: 0)
/// - `search` (optional): Case-insensitive name substring
///
/// # Errors
///
/// - 400 for invalid parameters
/// - 502 when the archive is unreachable after all retries
/// - 500 `store_unavailable` when the SQLite mirror cannot be read
pub async fn list_exoplanets_handler(
    State(state): State<AppState>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<CanonicalPlanet>>, AppError> {
    let Query(params) = query?;
    params.validate()?;

    let planets = state
        .exoplanet_service
        .list(
            params.limit.unwrap_or(DEFAULT_LIST_LIMIT),
            params.offset.unwrap_or(0),
            params.search,
        )
        .await?;

    Ok(Json(planets))
}

/// Finds planets by name.
///
/// # Endpoint
///
/// `GET /exoplanets/search?q=kepler`
///
/// # Query Parameters
///
/// - `q` (required): Non-empty, case-insensitive name substring
/// - `limit` (optional): 1 to 200 (default: 50)
pub async fn search_exoplanets_handler(
    State(state): State<AppState>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<CanonicalPlanet>>, AppError> {
    let Query(params) = query?;
    params.validate()?;

    let term = params.q.unwrap_or_default();
    let planets = state
        .exoplanet_service
        .search(&term, params.limit.unwrap_or(DEFAULT_LIST_LIMIT))
        .await?;

    Ok(Json(planets))
}

/// Filters planets by mass in Earth masses.
///
/// # Endpoint
///
/// `GET /exoplanets/filter?min_mass=1&max_mass=10`
///
/// # Query Parameters
///
/// - `min_mass`, `max_mass` (optional): Inclusive bounds
/// - `limit` (optional): 1 to 200 (default: 200)
///
/// Planets with unknown mass are excluded whenever a bound is given.
/// `min_mass > max_mass` is rejected with 400.
pub async fn filter_exoplanets_handler(
    State(state): State<AppState>,
    query: Result<Query<MassFilterParams>, QueryRejection>,
) -> Result<Json<Vec<CanonicalPlanet>>, AppError> {
    let Query(params) = query?;
    params.validate()?;

    let planets = state
        .exoplanet_service
        .filter_by_mass(
            params.min_mass,
            params.max_mass,
            params.limit.unwrap_or(DEFAULT_FILTER_LIMIT),
        )
        .await?;

    Ok(Json(planets))
}
