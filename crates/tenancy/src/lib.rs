//! # ddx-tenancy - Tenant & Partition Domain Model
//!
//! Core domain types for multi-tenant partition isolation in the DDX
//! clinical gateway. Every piece of clinical data lives in exactly one
//! partition, and every tenant (clinic) maps to exactly one partition
//! through the [`TenantRegistry`].
//!
//! ## Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`TenantId`] | Case-normalized tenant identifier (`ddx-<name>-clinic` convention) |
//! | [`PartitionId`] | Small non-negative partition number; `0` is reserved |
//! | [`TenantRegistry`] | Read-mostly, thread-safe tenant-to-partition mapping |
//! | [`RegistryError`] | Loud failures for malformed or reserved registrations |
//!
//! ## Invariants
//!
//! - Tenant identifiers are trimmed and lowercased at construction; lookups
//!   never depend on client casing.
//! - The `default` tenant always maps to partition 0 and can never be
//!   removed or remapped.
//! - No client tenant may map to partition 0.
//! - Registration is the only registry mutation, and it is audited at info
//!   level; request handling never mutates the mapping.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use ddx_tenancy::{PartitionId, TenantId, TenantRegistry};
//!
//! let registry = Arc::new(TenantRegistry::new());
//! registry.register(TenantId::new("ddx-hamburg-clinic"), PartitionId::new(1))?;
//!
//! assert_eq!(
//!     registry.partition_of(&TenantId::new("DDX-HAMBURG-CLINIC")),
//!     Some(PartitionId::new(1)),
//! );
//! # Ok::<(), ddx_tenancy::RegistryError>(())
//! ```

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod id;
pub mod partition;
pub mod registry;

// Re-export commonly used types
pub use error::RegistryError;
pub use id::{DEFAULT_TENANT, TENANT_PREFIX, TENANT_SUFFIX, TenantId, is_valid_tenant_id};
pub use partition::PartitionId;
pub use registry::TenantRegistry;
