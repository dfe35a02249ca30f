//! Tenant resolution and partition enforcement.
//!
//! This module decides which isolation partition every request is allowed
//! to operate against:
//!
//! - **X-Clinic-ID header**: primary tenant signal, used verbatim
//! - **Host subdomain**: `hamburg.fhir.example.com` → `ddx-hamburg-clinic`
//! - **Path segment**: `/fhir/clinic/hamburg/Patient` → `ddx-hamburg-clinic`
//!
//! # Resolution Priority
//!
//! When multiple sources carry a signal, they are tried in this priority
//! order (highest to lowest):
//!
//! 1. `X-Clinic-ID` header
//! 2. Host subdomain
//! 3. Path segment after `clinic`
//!
//! # Enforcement Policy
//!
//! One policy table applies across all hooks, documented on
//! [`TenantResolver`]: system-originated requests always use the default
//! partition, reads without a signal fall back to the default partition,
//! writes without a signal fail closed, and unknown tenants fail closed on
//! every hook.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ddx_gate::tenant::{PartitionHook, TenantResolver};
//! use ddx_tenancy::TenantRegistry;
//!
//! let resolver = TenantResolver::new(Arc::new(TenantRegistry::new()));
//!
//! // In a middleware, with a per-request context:
//! let partition = resolver.resolve(&ctx, PartitionHook::Read)?;
//! ```

mod resolver;
mod source;

pub use resolver::{Classification, PartitionHook, TenantResolver};
pub use source::{
    CLINIC_PATH_MARKER, ClinicHeaderExtractor, HostSubdomainExtractor, PathSegmentExtractor,
    TenantSignalExtractor, TenantSource, X_CLINIC_ID,
};
