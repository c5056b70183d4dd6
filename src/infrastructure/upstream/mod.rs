//! Upstream NASA integrations.
//!
//! - [`transport`] - Single-attempt HTTP GET seam ([`HttpTransport`])
//! - [`fetcher`] - Bounded retry with fixed delay ([`ResilientFetcher`])
//! - [`exoplanet_archive`] - TAP queries and the cached live planet repository
//! - [`neo_feed`] - NeoWs near-Earth object feed

pub mod exoplanet_archive;
pub mod fetcher;
pub mod neo_feed;
pub mod transport;

pub use exoplanet_archive::{CatalogCache, DEFAULT_ARCHIVE_URL, LivePlanetRepository, TapQuery};
pub use fetcher::{FetchError, ResilientFetcher, RetryPolicy};
pub use neo_feed::{DEFAULT_NEO_FEED_URL, MAX_FEED_WINDOW_DAYS, NeoFeedClient};
pub use transport::{HttpTransport, ReqwestTransport, TransportError};
