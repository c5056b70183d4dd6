//! NASA NeoWs feed client.

use chrono::{Days, NaiveDate};
use std::sync::Arc;

use super::fetcher::{FetchError, ResilientFetcher};
use crate::domain::entities::NearEarthObject;
use crate::domain::normalizer::normalize_neo_feed;

/// Public NeoWs feed endpoint.
pub const DEFAULT_NEO_FEED_URL: &str = "https://api.nasa.gov/neo/rest/v1/feed";

/// Longest window the feed accepts, in days past the start date.
pub const MAX_FEED_WINDOW_DAYS: u32 = 7;

/// Fetches and normalizes near-Earth objects for a date window.
pub struct NeoFeedClient {
    fetcher: Arc<ResilientFetcher>,
    feed_url: String,
    window_days: u32,
}

impl NeoFeedClient {
    /// Creates a client. `window_days` is clamped to [`MAX_FEED_WINDOW_DAYS`].
    pub fn new(fetcher: Arc<ResilientFetcher>, feed_url: String, window_days: u32) -> Self {
        Self {
            fetcher,
            feed_url,
            window_days: window_days.min(MAX_FEED_WINDOW_DAYS),
        }
    }

    /// Inclusive `(start, end)` window beginning at `start`.
    pub fn window(&self, start: NaiveDate) -> (NaiveDate, NaiveDate) {
        let end = start
            .checked_add_days(Days::new(u64::from(self.window_days)))
            .unwrap_or(start);
        (start, end)
    }

    /// Fetches the window starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the feed cannot be reached.
    pub async fn fetch(
        &self,
        start: NaiveDate,
        api_key: &str,
    ) -> Result<Vec<NearEarthObject>, FetchError> {
        let (start, end) = self.window(start);
        let query = vec![
            ("start_date".to_string(), start.format("%Y-%m-%d").to_string()),
            ("end_date".to_string(), end.format("%Y-%m-%d").to_string()),
            ("api_key".to_string(), api_key.to_string()),
        ];

        let payload = self.fetcher.fetch(&self.feed_url, &query).await?;
        Ok(normalize_neo_feed(&payload))
    }
}
