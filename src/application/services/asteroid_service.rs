//! Near-Earth object service.

use chrono::{NaiveDate, Utc};
use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::NearEarthObject;
use crate::error::AppError;
use crate::infrastructure::cache::ResultCache;
use crate::infrastructure::upstream::NeoFeedClient;

/// Cache of normalized feeds keyed by window start date.
pub type FeedCache = ResultCache<NaiveDate, Arc<Vec<NearEarthObject>>>;

/// Serves today's near-Earth objects from the NeoWs feed.
pub struct AsteroidService {
    client: NeoFeedClient,
    cache: Arc<FeedCache>,
    api_key: Option<String>,
}

impl AsteroidService {
    /// Creates a service. A blank `api_key` counts as absent.
    pub fn new(client: NeoFeedClient, cache: Arc<FeedCache>, api_key: Option<String>) -> Self {
        Self {
            client,
            cache,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// `(cached windows, capacity)`.
    pub fn cache_usage(&self) -> (usize, usize) {
        (self.cache.len(), self.cache.capacity())
    }

    /// Near-Earth objects for the window starting today (UTC).
    pub async fn today(&self) -> Result<Vec<NearEarthObject>, AppError> {
        self.for_date(Utc::now().date_naive()).await
    }

    /// Near-Earth objects for the window starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] without contacting the feed when no
    /// API key is configured, and [`AppError::Upstream`] when the feed fails.
    pub async fn for_date(&self, start: NaiveDate) -> Result<Vec<NearEarthObject>, AppError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(AppError::configuration(
                "NASA API key is not configured",
                json!({ "variable": "NASA_API_KEY" }),
            ));
        };

        let objects = self
            .cache
            .get_or_compute(start, || async move {
                self.client.fetch(start, api_key).await.map(Arc::new)
            })
            .await?;

        Ok(objects.as_ref().clone())
    }
}
