//! HTTP request/response tracing middleware.

use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnFailure, DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span};

/// Request span carrying the path and raw query string.
///
/// Planet responses depend on `limit`, `offset` and `search`, so the query is
/// recorded on its own field rather than folded into the URI.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "request",
            method = %request.method(),
            path = %request.uri().path(),
            query = request.uri().query().unwrap_or_default(),
        )
    }
}

/// Creates a tracing middleware for HTTP requests.
///
/// Responses log at `INFO` with status and latency in milliseconds. Server
/// errors (upstream 502s, store failures) are additionally logged at `WARN`.
///
/// ```text
/// INFO request{method=GET path=/exoplanets query=limit=10}: finished processing request latency=840 ms status=200
/// WARN request{method=GET path=/exoplanets query=}: response failed classification=Status code: 502 Bad Gateway latency=4012 ms
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestSpan> {
    TraceLayer::new_for_http()
        .make_span_with(RequestSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::WARN)
                .latency_unit(LatencyUnit::Millis),
        )
}

