//! Home endpoint announcing the SBOM stub.

use axum::Json;
use axum::http::header::{CONTENT_TYPE, HeaderValue};
use axum::response::IntoResponse;
use serde::Serialize;

/// Body returned by `GET /`.
pub const HOME_MESSAGE: &str = "Generating the SBOM!";

/// Content type of the home response, charset included.
pub const JSON_UTF8: &str = "application/json; charset=utf-8";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// GET /: returns the fixed SBOM placeholder message.
#[tracing::instrument]
pub async fn home() -> impl IntoResponse {
    metrics::counter!(super::metrics::HOME_REQUESTS_TOTAL).increment(1);

    (
        [(CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8))],
        Json(MessageResponse::new(HOME_MESSAGE)),
    )
}
