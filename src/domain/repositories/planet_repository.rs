//! Repository trait for planet data sources.

use crate::domain::entities::{CanonicalPlanet, HostStar};
use crate::error::AppError;
use async_trait::async_trait;

/// Deepest offset any planet source serves.
///
/// Together with the 200-row page cap this bounds the archive row window,
/// which is embedded in ADQL and used as a cache key, to 1200.
pub const MAX_OFFSET: u32 = 1000;

/// Filter criteria for planet queries.
///
/// Supports name search, inclusive mass bounds, and offset pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetQuery {
    pub limit: u32,
    pub offset: u32,
    /// Case-insensitive name substring.
    pub search: Option<String>,
    pub min_mass: Option<f64>,
    pub max_mass: Option<f64>,
}

impl PlanetQuery {
    /// Creates a query returning at most `limit` planets.
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            offset: 0,
            search: None,
            min_mass: None,
            max_mass: None,
        }
    }

    /// Skips the first `offset` matching planets.
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Restricts results to names containing `search`.
    ///
    /// Blank search terms are ignored.
    pub fn with_search(mut self, search: Option<String>) -> Self {
        self.search = search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        self
    }

    /// Restricts results to masses within the inclusive bounds.
    pub fn with_mass_range(mut self, min_mass: Option<f64>, max_mass: Option<f64>) -> Self {
        self.min_mass = min_mass;
        self.max_mass = max_mass;
        self
    }

    /// Number of leading upstream rows needed to answer this query.
    pub fn window(&self) -> u32 {
        self.limit.saturating_add(self.offset)
    }

    /// Returns true if the planet satisfies the search and mass criteria.
    pub fn matches(&self, planet: &CanonicalPlanet) -> bool {
        let name_ok = match &self.search {
            Some(needle) => planet.name_contains(&needle.to_lowercase()),
            None => true,
        };
        name_ok && planet.mass_within(self.min_mass, self.max_mass)
    }

    /// Applies criteria and pagination to an in-memory collection.
    pub fn apply(&self, planets: &[CanonicalPlanet]) -> Vec<CanonicalPlanet> {
        planets
            .iter()
            .filter(|p| self.matches(p))
            .skip(self.offset as usize)
            .take(self.limit as usize)
            .cloned()
            .collect()
    }
}

/// Read access to planet data, either live from the archive or from a local mirror.
///
/// # Implementations
///
/// - [`crate::infrastructure::upstream::LivePlanetRepository`] - Exoplanet Archive with LRU cache
/// - [`crate::infrastructure::persistence::SqlitePlanetRepository`] - Read-only SQLite mirror
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlanetRepository: Send + Sync {
    /// Returns planets matching the query, in source order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] when the archive cannot be reached.
    /// Returns [`AppError::StoreUnavailable`] when the mirror is missing or unreadable.
    async fn find_planets(&self, query: PlanetQuery) -> Result<Vec<CanonicalPlanet>, AppError>;

    /// Returns distinct host stars, first-seen order.
    ///
    /// # Errors
    ///
    /// Same as [`PlanetRepository::find_planets`].
    async fn find_host_stars(&self, limit: u32) -> Result<Vec<HostStar>, AppError>;

    /// Checks that the source is usable and describes its state.
    async fn health_check(&self) -> Result<String, AppError>;

    /// Short name of the source (`live` or `sqlite`).
    fn source_name(&self) -> &'static str;
}
