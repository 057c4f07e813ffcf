//! Transaction categorization endpoint.

use axum::Json;
use categorizer::{Category, categorize};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// -- Request types --

#[derive(Deserialize)]
pub struct CategorizeRequest {
    // Optional so that a missing field surfaces as our 400, not a
    // deserialization rejection.
    pub description: Option<String>,
}

// -- Response types --

#[derive(Serialize)]
pub struct CategorizeResponse {
    pub status: &'static str,
    pub predicted_category: Category,
    pub confidence: f64,
    pub method: &'static str,
    pub timestamp: String,
}

// -- Handlers --

/// POST /api/ml/categorize — predict a spending category for a description.
#[tracing::instrument(skip(req))]
pub async fn post(
    Json(req): Json<CategorizeRequest>,
) -> Result<Json<CategorizeResponse>, ApiError> {
    let description = req
        .description
        .ok_or_else(|| ApiError::BadRequest("Missing transaction description".to_string()))?;

    let result = categorize(&description);
    tracing::debug!(category = %result.category, confidence = result.confidence, "categorized");
    metrics::counter!("categorize_requests_total", "category" => result.category.as_str())
        .increment(1);

    Ok(Json(CategorizeResponse {
        status: "success",
        predicted_category: result.category,
        confidence: result.confidence,
        method: result.method,
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}
