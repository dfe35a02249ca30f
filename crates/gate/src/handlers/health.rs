//! Health check endpoint handler.
//!
//! Provides a simple health check endpoint for monitoring and load
//! balancers. The path is on the public allow-list, so it never requires a
//! credential.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::state::GateState;

/// Handler for the health check endpoint.
///
/// # HTTP Request
///
/// `GET [base]/health`
///
/// # Response
///
/// - `200 OK` - Gateway is healthy
pub async fn health_handler(State(state): State<GateState>) -> Response {
    debug!("Processing health check request");

    let health_response = serde_json::json!({
        "status": "healthy",
        "auth_enabled": state.auth_gate().is_enabled(),
        "registered_tenants": state.registry().len(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    (StatusCode::OK, Json(health_response)).into_response()
}
