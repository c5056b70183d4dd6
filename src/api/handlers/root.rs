//! Handlers for the root status endpoint and unknown paths.

use axum::Json;
use axum::http::Uri;
use serde_json::{Value, json};

use crate::error::AppError;

/// Reports that the API is online.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "status": "NASA Space Research API Online" }))
}

/// Answers unknown paths with the JSON error envelope instead of an empty 404.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("No such route", json!({ "path": uri.path() }))
}
