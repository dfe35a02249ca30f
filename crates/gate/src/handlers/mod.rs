//! HTTP request handlers for the gateway surface.
//!
//! - [`health`] - Health check endpoint (public)
//! - [`metadata`] - Minimal CapabilityStatement (public)
//! - [`admin`] - Tenant registry administration (authenticated)
//! - [`forward`] - Placeholder forwarding hop (authenticated, partitioned)

pub mod admin;
pub mod forward;
pub mod health;
pub mod metadata;

// Re-export handlers for convenience
pub use admin::{TenantEntry, list_tenants_handler, register_tenant_handler};
pub use forward::forward_handler;
pub use health::health_handler;
pub use metadata::metadata_handler;
