//! Tenant administration handlers.
//!
//! Exposes the registry's administrative surface over HTTP:
//!
//! - `GET /admin/tenants` - snapshot of the current tenant mapping
//! - `POST /admin/tenants` - register a tenant (the explicit, audited
//!   registration act; tenants are never auto-provisioned from traffic)
//!
//! Admin routes sit behind the auth gate but outside the partition
//! middleware: registry administration is not a storage operation.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::info;

use ddx_tenancy::{PartitionId, TenantId};

use crate::error::GateResult;
use crate::state::GateState;

/// One tenant-to-partition mapping entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantEntry {
    /// The tenant identifier.
    pub tenant: TenantId,
    /// The partition the tenant maps to.
    pub partition: PartitionId,
}

/// Handler listing all registered tenants.
///
/// # HTTP Request
///
/// `GET [base]/admin/tenants`
///
/// # Response
///
/// `200 OK` with a sorted array of `{ "tenant": ..., "partition": n }`.
pub async fn list_tenants_handler(State(state): State<GateState>) -> Response {
    let entries: Vec<TenantEntry> = state
        .registry()
        .snapshot()
        .into_iter()
        .map(|(tenant, partition)| TenantEntry { tenant, partition })
        .collect();

    (StatusCode::OK, Json(entries)).into_response()
}

/// Handler registering a tenant or reassigning its partition.
///
/// # HTTP Request
///
/// `POST [base]/admin/tenants` with body `{ "tenant": ..., "partition": n }`
///
/// # Response
///
/// - `201 Created` with the registered entry
/// - `400 Bad Request` with an OperationOutcome for malformed identifiers
///   or reserved assignments
pub async fn register_tenant_handler(
    State(state): State<GateState>,
    Json(entry): Json<TenantEntry>,
) -> GateResult<Response> {
    state
        .registry()
        .register(entry.tenant.clone(), entry.partition)?;

    info!(tenant_id = %entry.tenant, partition = %entry.partition, "Tenant registered via admin API");

    Ok((StatusCode::CREATED, Json(entry)).into_response())
}
