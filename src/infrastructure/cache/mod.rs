//! Caching layer for upstream results.
//!
//! Provides [`ResultCache`], a bounded in-process LRU with per-key
//! coalescing of concurrent misses. Instances are constructed at startup and
//! injected where needed; there is no global cache.

mod result_cache;

pub use result_cache::{EXOPLANET_CACHE_CAPACITY, FEED_CACHE_CAPACITY, ResultCache};
