//! HTTP route handlers.

pub mod categorize;
pub mod health;
pub mod metrics;

use crate::error::ApiError;

/// Fallback handler for unmatched paths.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
