//! API error types with HTTP response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// API-level error type that maps to HTTP responses.
///
/// Every failure resolves at the request-handling boundary; there is no
/// retry or recovery logic behind any variant.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request from the client (e.g. missing description).
    #[error("{0}")]
    BadRequest(String),

    /// No route matched the request path.
    #[error("Endpoint not found")]
    NotFound,

    /// Unexpected internal failure.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => {
                let body = serde_json::json!({ "error": msg });
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::NotFound => {
                let body = serde_json::json!({
                    "error": "Endpoint not found",
                    "message": "The requested endpoint does not exist",
                });
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                let body = serde_json::json!({
                    "error": "Internal server error",
                    "message": msg,
                });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
