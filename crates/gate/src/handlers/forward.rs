//! Forwarding placeholder handler.
//!
//! Stands in for the hop to the FHIR persistence engine: every request that
//! clears the gate lands here tagged with its resolved partition. A real
//! deployment replaces this fallback with the storage collaborator's
//! router; the handler exists so the gate can be exercised end to end.

use axum::{
    Json,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::extractors::ResolvedPartition;

/// Fallback handler echoing the gate's decision.
///
/// # Response
///
/// `200 OK` with the method, path, and resolved partition the storage
/// engine would receive.
pub async fn forward_handler(
    ResolvedPartition(partition): ResolvedPartition,
    method: Method,
    uri: Uri,
) -> Response {
    debug!(method = %method, path = %uri.path(), partition = %partition, "Forwarding gated request");

    let body = serde_json::json!({
        "method": method.as_str(),
        "path": uri.path(),
        "partition": partition,
    });

    (StatusCode::OK, Json(body)).into_response()
}
