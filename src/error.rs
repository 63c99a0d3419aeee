//! Error types for the upload pipeline.
//!
//! A missing or unnamed upload is not an error value at all: the handler
//! answers it with a redirect to the landing page. Everything that goes wrong
//! after that point collapses into a single JSON payload, `{"error": "..."}`,
//! served with status 200.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

/// Failures talking to, or making sense of, the vision API.
#[derive(Debug, Error)]
pub enum VisionError {
    /// Connection refused, DNS failure, TLS failure and the like.
    #[error("vision API request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("vision API did not answer within {secs}s")]
    Timeout { secs: u64 },

    /// The response body was not JSON.
    #[error("vision API returned a body that is not JSON: {0}")]
    Decode(#[source] reqwest::Error),

    /// The service answered with its own error object.
    #[error("vision API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("vision API response has no message content at {path}")]
    MissingContent { path: &'static str },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read upload: {0}")]
    Upload(#[source] axum::extract::multipart::MultipartError),

    #[error("upload exceeds {limit} bytes")]
    UploadTooLarge { limit: usize },

    #[error(transparent)]
    Upstream(#[from] VisionError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "upload failed");
        (StatusCode::OK, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
