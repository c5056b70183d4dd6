//! NASA Exoplanet Archive client and the live planet repository.

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use super::fetcher::{FetchError, ResilientFetcher};
use crate::domain::entities::{CanonicalPlanet, HostStar, PlanetCatalog};
use crate::domain::normalizer::{build_catalog, fields};
use crate::domain::repositories::{PlanetQuery, PlanetRepository};
use crate::error::AppError;
use crate::infrastructure::cache::ResultCache;

/// Public TAP synchronous query endpoint.
pub const DEFAULT_ARCHIVE_URL: &str = "https://exoplanetarchive.ipac.caltech.edu/TAP/sync";

/// Planetary Systems Composite Parameters table.
const PLANET_TABLE: &str = "pscomppars";

/// Cache of normalized catalogs keyed by requested row count.
pub type CatalogCache = ResultCache<u32, Arc<PlanetCatalog>>;

/// ADQL query against the planet table.
///
/// The row limit is the only variable part and is a typed integer; no caller
/// text ever reaches the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapQuery {
    top: u32,
}

impl TapQuery {
    /// Selects the first `top` planets.
    pub fn planets(top: u32) -> Self {
        Self { top }
    }

    /// Renders the ADQL text.
    pub fn to_adql(&self) -> String {
        format!(
            "select top {} {} from {}",
            self.top,
            fields::ALL.join(","),
            PLANET_TABLE
        )
    }

    /// Query parameters for the TAP `sync` endpoint.
    pub fn params(&self) -> Vec<(String, String)> {
        vec![
            ("query".to_string(), self.to_adql()),
            ("format".to_string(), "json".to_string()),
        ]
    }
}

/// Serves planets straight from the Exoplanet Archive.
///
/// Each distinct row window is fetched, deduplicated and normalized once, then
/// kept in the injected [`CatalogCache`].
pub struct LivePlanetRepository {
    fetcher: Arc<ResilientFetcher>,
    cache: Arc<CatalogCache>,
    archive_url: String,
}

impl LivePlanetRepository {
    pub fn new(fetcher: Arc<ResilientFetcher>, cache: Arc<CatalogCache>, archive_url: String) -> Self {
        Self {
            fetcher,
            cache,
            archive_url,
        }
    }

    /// Returns the catalog built from the first `window` archive rows.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the archive cannot be reached.
    pub async fn catalog(&self, window: u32) -> Result<Arc<PlanetCatalog>, FetchError> {
        self.cache
            .get_or_compute(window, || async move {
                let query = TapQuery::planets(window);
                let payload = self.fetcher.fetch(&self.archive_url, &query.params()).await?;
                let catalog = build_catalog(payload);
                info!(
                    window,
                    planets = catalog.planets.len(),
                    host_stars = catalog.host_stars.len(),
                    "Fetched planet catalog from archive"
                );
                Ok(Arc::new(catalog))
            })
            .await
    }
}

#[async_trait]
impl PlanetRepository for LivePlanetRepository {
    async fn find_planets(&self, query: PlanetQuery) -> Result<Vec<CanonicalPlanet>, AppError> {
        let catalog = self.catalog(query.window()).await?;
        Ok(query.apply(&catalog.planets))
    }

    async fn find_host_stars(&self, limit: u32) -> Result<Vec<HostStar>, AppError> {
        let catalog = self.catalog(limit).await?;
        Ok(catalog
            .host_stars
            .iter()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> Result<String, AppError> {
        if self.archive_url.is_empty() {
            return Err(AppError::configuration(
                "Exoplanet Archive URL is empty",
                json!({}),
            ));
        }
        Ok(format!(
            "Live archive {}, {}/{} catalogs cached",
            self.archive_url,
            self.cache.len(),
            self.cache.capacity()
        ))
    }

    fn source_name(&self) -> &'static str {
        "live"
    }
}
