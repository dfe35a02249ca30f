//! Error types for the tenancy domain.

use thiserror::Error;

use crate::id::TenantId;
use crate::partition::PartitionId;

/// Errors raised by registry mutations.
///
/// Registration is the only mutation the registry supports, and it fails
/// loudly: malformed identifiers and reserved assignments are never
/// silently corrected.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The identifier is empty, too long, or contains invalid characters.
    #[error("invalid tenant identifier: {id:?}")]
    InvalidTenantId {
        /// The offending identifier, after normalization.
        id: String,
    },

    /// Partition 0 is reserved for the default tenant.
    #[error("partition {partition} is reserved and cannot be assigned to tenant {tenant_id}")]
    ReservedPartition {
        /// The tenant that requested the reserved partition.
        tenant_id: TenantId,
        /// The reserved partition id.
        partition: PartitionId,
    },

    /// The default tenant is pinned to the default partition.
    #[error("tenant {tenant_id} is reserved and cannot be remapped to partition {partition}")]
    ReservedTenant {
        /// The reserved tenant.
        tenant_id: TenantId,
        /// The partition the remap attempted.
        partition: PartitionId,
    },
}
