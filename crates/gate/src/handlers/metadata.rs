//! Metadata (CapabilityStatement) handler.
//!
//! Serves a minimal CapabilityStatement describing the gateway's security
//! posture: bearer-token authentication and the tenant-identification
//! headers it understands. The full capability statement for resource
//! interactions belongs to the upstream FHIR engine; this endpoint exists
//! so discovery works without credentials.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::state::GateState;

/// Handler for the metadata endpoint.
///
/// # HTTP Request
///
/// `GET [base]/metadata`
///
/// # Response
///
/// Returns a CapabilityStatement resource (200 OK) describing the
/// gateway's security layer.
pub async fn metadata_handler(State(state): State<GateState>) -> Response {
    debug!("Processing metadata request");

    let security_description = if state.auth_gate().is_enabled() {
        "Bearer token required: Authorization: Bearer <api-token>. \
         Tenant identification via X-Clinic-ID header, host subdomain, or /clinic/{name} path."
    } else {
        "Authentication disabled (development mode). \
         Tenant identification via X-Clinic-ID header, host subdomain, or /clinic/{name} path."
    };

    let capability_statement = serde_json::json!({
        "resourceType": "CapabilityStatement",
        "status": "active",
        "date": chrono::Utc::now().to_rfc3339(),
        "kind": "instance",
        "software": {
            "name": "DDX Clinical Gateway"
        },
        "implementation": {
            "description": "Multi-tenant request gateway for the DDX clinical data service"
        },
        "fhirVersion": "4.0.1",
        "format": ["application/fhir+json"],
        "rest": [{
            "mode": "server",
            "security": {
                "cors": false,
                "service": [{
                    "coding": [{
                        "system": "http://terminology.hl7.org/CodeSystem/restful-security-service",
                        "code": "OAuth",
                        "display": "Bearer token"
                    }]
                }],
                "description": security_description
            }
        }]
    });

    (StatusCode::OK, Json(capability_statement)).into_response()
}
