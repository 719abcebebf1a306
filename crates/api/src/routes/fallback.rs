//! JSON responses for requests no route handles.

use axum::http::{Method, Uri};

use crate::error::ApiError;

/// Any unrouted path: 404 with a JSON error body.
#[tracing::instrument]
pub async fn not_found(uri: Uri) -> ApiError {
    tracing::debug!("no matching route");
    ApiError::NotFound(format!("No route for {}", uri.path()))
}

/// Routed path, unsupported method: 405 with a JSON error body.
#[tracing::instrument]
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed(format!("Method {method} not allowed on {}", uri.path()))
}
