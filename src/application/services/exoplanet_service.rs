//! Exoplanet listing, search, filtering and summary service.

use serde_json::json;
use std::sync::Arc;

use crate::domain::aggregator::summarize;
use crate::domain::entities::{CanonicalPlanet, HostStar, SummaryStatistics};
use crate::domain::repositories::{MAX_OFFSET, PlanetQuery, PlanetRepository};
use crate::error::AppError;

/// Service over a planet source.
///
/// The source is either the live archive or the SQLite mirror; the service
/// does not know which. Validation that spans several parameters lives here so
/// the CLI gets the same checks as the HTTP layer.
pub struct ExoplanetService<R: PlanetRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: PlanetRepository + ?Sized> ExoplanetService<R> {
    /// Creates a new exoplanet service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists planets in source order with optional name search.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `offset` exceeds [`MAX_OFFSET`].
    /// Propagates source failures ([`AppError::Upstream`], [`AppError::StoreUnavailable`]).
    pub async fn list(
        &self,
        limit: u32,
        offset: u32,
        search: Option<String>,
    ) -> Result<Vec<CanonicalPlanet>, AppError> {
        if offset > MAX_OFFSET {
            return Err(AppError::bad_request(
                "offset is too large",
                json!({ "offset": offset, "max": MAX_OFFSET }),
            ));
        }

        let query = PlanetQuery::new(limit)
            .with_offset(offset)
            .with_search(search);
        self.repository.find_planets(query).await
    }

    /// Finds planets whose name contains `term`, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `term` is blank.
    pub async fn search(&self, term: &str, limit: u32) -> Result<Vec<CanonicalPlanet>, AppError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(AppError::bad_request(
                "Search term must not be empty",
                json!({ "field": "q" }),
            ));
        }

        let query = PlanetQuery::new(limit).with_search(Some(term.to_string()));
        self.repository.find_planets(query).await
    }

    /// Returns planets whose mass lies within the inclusive bounds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `min_mass > max_mass`.
    pub async fn filter_by_mass(
        &self,
        min_mass: Option<f64>,
        max_mass: Option<f64>,
        limit: u32,
    ) -> Result<Vec<CanonicalPlanet>, AppError> {
        if let (Some(min), Some(max)) = (min_mass, max_mass)
            && min > max
        {
            return Err(AppError::bad_request(
                "min_mass must not exceed max_mass",
                json!({ "min_mass": min, "max_mass": max }),
            ));
        }

        let query = PlanetQuery::new(limit).with_mass_range(min_mass, max_mass);
        self.repository.find_planets(query).await
    }

    /// Lists distinct host stars.
    pub async fn host_stars(&self, limit: u32) -> Result<Vec<HostStar>, AppError> {
        self.repository.find_host_stars(limit).await
    }

    /// Summarizes the first `limit` planets.
    pub async fn summary(&self, limit: u32) -> Result<SummaryStatistics, AppError> {
        let planets = self.repository.find_planets(PlanetQuery::new(limit)).await?;
        Ok(summarize(&planets))
    }

    /// Describes the state of the planet source.
    pub async fn source_status(&self) -> Result<String, AppError> {
        self.repository.health_check().await
    }

    pub fn source_name(&self) -> &'static str {
        self.repository.source_name()
    }
}
