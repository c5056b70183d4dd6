//! Rate limiting middleware using token bucket algorithm.

use anyhow::{Result, anyhow};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

pub type RateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a per-IP rate limiter for the data routes.
///
/// Every data request may hit NASA upstreams, which share one API quota, so
/// the limiter sits in front of them.
///
/// # Limits
///
/// - **Rate**: `per_second` tokens per second, at most one per millisecond
/// - **Burst**: `burst` requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Errors
///
/// Returns an error if `per_second` or `burst` is zero.
pub fn layer(per_second: u64, burst: u32) -> Result<RateLimitLayer> {
    if per_second == 0 {
        return Err(anyhow!("rate limit per second must be at least 1"));
    }

    let governor_conf = GovernorConfigBuilder::default()
        .per_millisecond((1000 / per_second).max(1))
        .burst_size(burst)
        .finish()
        .ok_or_else(|| anyhow!("rate limit burst must be at least 1"))?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}
