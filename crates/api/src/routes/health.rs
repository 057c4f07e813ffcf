//! Health check endpoints.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
    pub service: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub uptime: &'static str,
    pub database: &'static str,
    pub ml_models: &'static str,
    pub timestamp: String,
}

/// GET /ping — liveness check.
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        status: "success",
        message: "ML Service is running",
        timestamp: chrono::Utc::now().to_rfc3339(),
        service: "fintrack-ml-service",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health — detailed health status.
///
/// The database and model fields report the not-yet-wired placeholders;
/// this service always answers healthy while the process is up.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "ML Service",
        uptime: "Active",
        database: "Not connected (future implementation)",
        ml_models: "Not loaded (future implementation)",
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
