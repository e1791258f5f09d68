//! Error mapping for the relay's non-streaming endpoints.
//!
//! The chat relay reports failures in-band on its byte stream instead, since
//! its response headers are committed before the upstream call can fail.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Failures surfaced by the JSON endpoints as `{"detail": ...}` bodies.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The Ollama server could not be reached at all.
    #[error("Could not connect to Ollama server. Please ensure Ollama is running.")]
    Unreachable,

    /// Ollama answered, but with an error status or an unexpected body.
    #[error("{0}")]
    Upstream(String),
}

#[derive(Serialize)]
struct Detail {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Unreachable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Detail {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            ApiError::Unreachable
        } else {
            ApiError::Upstream(err.to_string())
        }
    }
}
