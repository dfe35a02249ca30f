//! # ddx-gate - Request-Boundary Gatekeeper
//!
//! This crate implements the request boundary of the DDX clinical gateway:
//! it authenticates inbound requests and resolves each one to an isolated
//! tenant partition before any data access occurs. The FHIR persistence
//! engine behind it is an external collaborator; this crate only decides
//! whether a request may pass and which partition it is confined to.
//!
//! ## Pipeline
//!
//! ```text
//! inbound request
//!   → auth middleware   (bearer-token gate, public-path allow-list)
//!   → partition middleware (tenant resolution, partition enforcement)
//!   → forwarding hop    (tagged with the resolved partition)
//! ```
//!
//! ## Tenant Identification
//!
//! Tenant signals are tried in priority order:
//!
//! 1. `X-Clinic-ID` header (used verbatim)
//! 2. Host subdomain: `hamburg.fhir.example.com` → `ddx-hamburg-clinic`
//! 3. Path segment: `/fhir/clinic/hamburg/Patient` → `ddx-hamburg-clinic`
//!
//! System-originated requests (marked by inserting
//! [`RequestContext::internal`] before routing) bypass tenant enforcement
//! and run against the default partition.
//!
//! ## Authentication
//!
//! A single static bearer token, checked on every request except the
//! public allow-list (`/metadata`, `/health`, `/.well-known/`, `/oauth/`).
//! **The gate is disabled by default** (`DDX_AUTH_ENABLED=false`) as an
//! explicit local-development mode; production deployments enable it.
//! Verification is pluggable through
//! [`CredentialVerifier`](auth::CredentialVerifier).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ddx_gate::{GatewayConfig, create_app, init_logging};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = GatewayConfig::from_env();
//!     init_logging(&config.log_level);
//!
//!     let app = create_app(config.clone())?;
//!
//!     let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All rejections are FHIR OperationOutcome resources:
//!
//! | HTTP Status | FHIR Issue Code | Cause |
//! |-------------|-----------------|-------|
//! | 401 | login | Missing, malformed, or invalid credential |
//! | 400 | required | No tenant signal on an isolation-requiring operation |
//! | 404 | not-found | Tenant identifier not in the registry |
//! | 400 | invalid | Malformed registration or request input |
//!
//! ## Architecture
//!
//! - [`auth`] - Bearer-token gate and credential verifiers
//! - [`tenant`] - Tenant signal extraction and partition resolution
//! - [`context`] - Per-request origin and resolution state
//! - [`middleware`] - Axum middleware wiring the gate into the pipeline
//! - [`extractors`] - Handler-side access to the resolved partition
//! - [`handlers`] - Public, administrative, and forwarding endpoints
//! - [`routing`] - Route tree and layer ordering
//! - [`config`] - Gateway configuration
//! - [`state`] - Shared application state
//! - [`error`] - Error taxonomy and OperationOutcome mapping

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod auth;
pub mod config;
pub mod context;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routing;
pub mod state;
pub mod tenant;

// Re-export commonly used types
pub use config::GatewayConfig;
pub use context::{ClientAttributes, Origin, RequestContext};
pub use error::{AuthError, GateError, GateResult, TenantError};
pub use state::GateState;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

/// Creates the Axum application from configuration.
///
/// Seeds the tenant registry, builds the auth gate, and wires the route
/// tree with tracing and timeout layers.
pub fn create_app(config: GatewayConfig) -> GateResult<Router> {
    let state = GateState::from_config(config)?;
    Ok(create_app_with_state(state))
}

/// Creates the Axum application from pre-built state.
///
/// Useful when the caller constructs the registry or auth gate itself
/// (tests, embedded deployments).
pub fn create_app_with_state(state: GateState) -> Router {
    info!(
        auth_enabled = state.auth_gate().is_enabled(),
        registered_tenants = state.registry().len(),
        "Creating gateway application"
    );

    let request_timeout = state.config().request_timeout;
    let router = routing::create_routes(state);

    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::with_status_code(
                axum::http::StatusCode::REQUEST_TIMEOUT,
                std::time::Duration::from_secs(request_timeout),
            )),
    )
}

/// Initializes the tracing subscriber for the gateway.
///
/// Respects `RUST_LOG` when set; otherwise uses the configured level for
/// the gateway crates and debug for tower-http.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "ddx_gate={level},ddx_tenancy={level},ddx_gateway={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
