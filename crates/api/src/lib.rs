//! HTTP placeholder service for SBOM generation.
//!
//! Serves a fixed JSON message on `GET /`, plus health and Prometheus
//! endpoints, with structured logging (tracing).

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::{ApiError, ServerError};

/// Creates the Axum application router with all routes.
pub fn create_app(metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    let router = Router::new()
        .route("/", get(routes::home::home))
        .route("/health", get(routes::health::check))
        .merge(metrics_router)
        .fallback(routes::fallback::not_found)
        .method_not_allowed_fallback(routes::fallback::method_not_allowed);

    with_middleware(router)
}

/// Panic recovery runs inside the request trace span.
fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
}
