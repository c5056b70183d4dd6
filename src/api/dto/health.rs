//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response with component status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Active planet source (`live` or `sqlite`).
    pub source: String,
    pub checks: HealthChecks,
}

/// Health status for each upstream component.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub planet_source: CheckStatus,
    pub neo_feed: CheckStatus,
}

/// Individual component health status.
///
/// `status` is `ok`, `disabled` or `error`.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckStatus {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: Some(message.into()),
        }
    }

    pub fn disabled(message: impl Into<String>) -> Self {
        Self {
            status: "disabled".to_string(),
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message.into()),
        }
    }

    /// Whether the component prevents the service from answering requests.
    pub fn is_failing(&self) -> bool {
        self.status == "error"
    }
}
