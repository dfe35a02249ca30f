//! Error types for the gate layer.
//!
//! This module defines the errors raised at the request boundary, with
//! automatic conversion to FHIR OperationOutcome responses.
//!
//! # Error Mapping
//!
//! Gate errors are mapped to HTTP status codes and FHIR issue codes:
//!
//! | Gate Error | HTTP Status | FHIR Issue Code |
//! |-----------|-------------|-----------------|
//! | Auth (missing/malformed/invalid credential) | 401 | login |
//! | Tenant::MissingTenant | 400 | required |
//! | Tenant::UnknownTenant | 404 | not-found |
//! | Registry | 400 | invalid |
//! | BadRequest | 400 | invalid |

#![allow(missing_docs)]

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use ddx_tenancy::{RegistryError, TenantId};

/// Errors raised while checking request credentials.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No Authorization header was presented on a protected path.
    #[error("authentication required: no credential presented")]
    MissingCredential,

    /// The Authorization header did not carry a bearer token.
    #[error("authentication failed: credential is not a bearer token")]
    MalformedCredential,

    /// The bearer token did not verify.
    #[error("authentication failed: credential rejected")]
    InvalidCredential,
}

/// Errors raised while resolving a request to a tenant partition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TenantError {
    /// The operation requires tenant isolation but the request carried no
    /// tenant signal.
    #[error("tenant identification required for this operation")]
    MissingTenant,

    /// The request identified a tenant that is not registered.
    #[error("unknown tenant: {tenant_id}")]
    UnknownTenant { tenant_id: TenantId },
}

/// The primary error type for gate operations.
///
/// Wraps the stage-specific errors and maps each to an HTTP response
/// carrying a FHIR OperationOutcome.
#[derive(Error, Debug)]
pub enum GateError {
    /// Credential check failures
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Tenant resolution failures
    #[error(transparent)]
    Tenant(#[from] TenantError),

    /// Tenant registry failures
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Malformed request input (HTTP 400).
    #[error("bad request: {message}")]
    BadRequest { message: String },
}

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            GateError::Auth(_) => (StatusCode::UNAUTHORIZED, "login"),
            GateError::Tenant(TenantError::MissingTenant) => (StatusCode::BAD_REQUEST, "required"),
            GateError::Tenant(TenantError::UnknownTenant { .. }) => {
                (StatusCode::NOT_FOUND, "not-found")
            }
            GateError::Registry(_) => (StatusCode::BAD_REQUEST, "invalid"),
            GateError::BadRequest { .. } => (StatusCode::BAD_REQUEST, "invalid"),
        };

        let operation_outcome = create_operation_outcome("error", code, &self.to_string());
        (status, Json(operation_outcome)).into_response()
    }
}

/// Creates a FHIR OperationOutcome resource.
///
/// # Arguments
///
/// * `severity` - The issue severity (fatal, error, warning, information)
/// * `code` - The FHIR issue code
/// * `details` - Human-readable details
fn create_operation_outcome(severity: &str, code: &str, details: &str) -> serde_json::Value {
    serde_json::json!({
        "resourceType": "OperationOutcome",
        "issue": [{
            "severity": severity,
            "code": code,
            "details": {
                "text": details
            }
        }]
    })
}

/// Result type alias for gate operations.
pub type GateResult<T> = Result<T, GateError>;
