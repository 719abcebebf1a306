//! Prometheus metrics endpoint and metric registrations.

use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use metrics_exporter_prometheus::PrometheusHandle;

pub const HOME_REQUESTS_TOTAL: &str = "sbom_home_requests_total";

const PROMETHEUS_TEXT: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Registers help text for every metric the service emits.
///
/// Call once after the recorder is installed.
pub fn describe() {
    ::metrics::describe_counter!(HOME_REQUESTS_TOTAL, "Requests served by GET /");
}

/// GET /metrics: text exposition of the installed recorder.
#[tracing::instrument(skip_all)]
pub async fn get(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    (StatusCode::OK, [(CONTENT_TYPE, PROMETHEUS_TEXT)], handle.render())
}
