//! Retrying upstream fetcher.

use metrics::counter;
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use thiserror::Error;
use tokio_retry::Retry;
use tokio_retry::strategy::FixedInterval;
use tracing::{debug, error, warn};

use super::transport::{HttpTransport, TransportError};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(2);
pub const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(30);

/// Attempt budget and timing for upstream calls.
///
/// The delay between attempts is constant: no jitter, no growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub retry_delay: Duration,
    pub attempt_timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay: DEFAULT_RETRY_DELAY,
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
        }
    }
}

/// Upstream failure after the attempt budget is exhausted.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("upstream {endpoint} failed after {attempts} attempt(s): {source}")]
    Upstream {
        endpoint: String,
        attempts: u32,
        #[source]
        source: TransportError,
    },
}

/// Fetches JSON from upstream endpoints with bounded retries.
///
/// Every transport-level failure (timeout, connection error, non-2xx status,
/// non-JSON body) consumes one attempt. Each attempt is bounded by
/// [`RetryPolicy::attempt_timeout`].
pub struct ResilientFetcher {
    transport: Arc<dyn HttpTransport>,
    policy: RetryPolicy,
}

impl ResilientFetcher {
    pub fn new(transport: Arc<dyn HttpTransport>, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    /// Fetches `endpoint` with the given query parameters.
    ///
    /// Parameters are URL-encoded by the transport; callers never splice them
    /// into the URL.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Upstream`] carrying the last attempt's error once
    /// all attempts have failed.
    pub async fn fetch(
        &self,
        endpoint: &str,
        query: &[(String, String)],
    ) -> Result<Value, FetchError> {
        let max_attempts = self.policy.max_attempts.max(1);
        let delays = FixedInterval::new(self.policy.retry_delay).take(max_attempts as usize - 1);

        let attempts = AtomicU32::new(0);
        let attempts_ref = &attempts;

        let result = Retry::spawn(delays, move || {
            let attempt = attempts_ref.fetch_add(1, Ordering::SeqCst) + 1;
            async move { self.attempt(endpoint, query, attempt, max_attempts).await }
        })
        .await;

        result.map_err(|source| {
            let attempts = attempts.load(Ordering::SeqCst);
            counter!("upstream_fetch_failures_total").increment(1);
            error!(
                endpoint,
                attempts,
                error = %source,
                "Upstream fetch failed after all attempts"
            );
            FetchError::Upstream {
                endpoint: endpoint.to_string(),
                attempts,
                source,
            }
        })
    }

    async fn attempt(
        &self,
        endpoint: &str,
        query: &[(String, String)],
        attempt: u32,
        max_attempts: u32,
    ) -> Result<Value, TransportError> {
        counter!("upstream_fetch_attempts_total").increment(1);
        debug!(endpoint, attempt, max_attempts, "Fetching upstream");

        let timeout = self.policy.attempt_timeout;
        let outcome = match tokio::time::timeout(timeout, self.transport.get_json(endpoint, query))
            .await
        {
            Ok(result) => result,
            Err(_) => Err(TransportError::Timeout(timeout)),
        };

        if let Err(e) = &outcome
            && attempt < max_attempts
        {
            warn!(
                endpoint,
                attempt,
                max_attempts,
                retry_in = ?self.policy.retry_delay,
                error = %e,
                "Upstream attempt failed, retrying"
            );
        }

        outcome
    }
}
