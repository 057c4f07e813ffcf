//! HTTP API server for the transaction categorization service.
//!
//! Exposes health-check endpoints and a placeholder categorization endpoint,
//! with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use axum::routing::{get, post};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates the Axum application router with all routes.
///
/// The categorization rule table is compile-time constant, so handlers carry
/// no shared state; only the metrics endpoint needs the Prometheus handle.
pub fn create_app(metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/ping", get(routes::health::ping))
        .route("/health", get(routes::health::check))
        .route("/api/ml/categorize", post(routes::categorize::post))
        .merge(metrics_router)
        .fallback(routes::not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
