//! Route configuration for the gateway.
//!
//! Defines the gateway's route tree and the middleware layering that makes
//! the gate's ordering guarantees hold: the auth gate is outermost, so
//! unauthenticated requests are rejected before tenant resolution runs.

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::get,
};

use crate::handlers;
use crate::middleware::{auth_middleware, partition_middleware};
use crate::state::GateState;

/// Creates the gateway routes.
///
/// # Routes
///
/// ## Public (allow-listed, no credential required)
/// - `GET /health` - Health check
/// - `GET /metadata` - CapabilityStatement
///
/// ## Administrative (auth gate only; not a storage operation)
/// - `GET /admin/tenants` - Registry snapshot
/// - `POST /admin/tenants` - Register a tenant
///
/// ## Gated fallback (auth gate + partition enforcement)
/// - Every other path resolves a partition and reaches the forwarding hop
pub fn create_routes(state: GateState) -> Router {
    // The partition middleware applies only to the forwarding surface;
    // registry administration is not a storage operation.
    let gated = Router::new()
        .fallback(handlers::forward_handler)
        .layer(from_fn_with_state(state.clone(), partition_middleware));

    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/metadata", get(handlers::metadata_handler))
        .route(
            "/admin/tenants",
            get(handlers::list_tenants_handler).post(handlers::register_tenant_handler),
        )
        .merge(gated)
        .layer(from_fn_with_state(state.clone(), auth_middleware))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    // Route behavior is covered by the integration tests.
}
