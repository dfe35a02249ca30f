//! Tenant registry mapping tenant identifiers to partitions.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::info;

use crate::error::RegistryError;
use crate::id::TenantId;
use crate::partition::PartitionId;

/// Thread-safe mapping from tenant identifiers to partition ids.
///
/// The registry is read-mostly: request handling performs lookups, while
/// mutation happens only through [`register`](Self::register), an explicit
/// administrative operation. Lookups share a read lock and never block each
/// other; registrations take a brief exclusive section.
///
/// Two invariants hold for the registry's entire lifetime:
///
/// - the `default` tenant is present and mapped to [`PartitionId::DEFAULT`],
///   and cannot be removed or remapped;
/// - no other tenant may map to the default partition.
///
/// The registry is always dependency-injected (shared via `Arc`), never
/// process-global.
///
/// # Examples
///
/// ```
/// use ddx_tenancy::{PartitionId, TenantId, TenantRegistry};
///
/// let registry = TenantRegistry::new();
/// registry.register(TenantId::new("DDX-Hamburg-Clinic"), PartitionId::new(1))?;
///
/// // Lookups are case-normalized.
/// let partition = registry.partition_of(&TenantId::new(" ddx-hamburg-clinic "));
/// assert_eq!(partition, Some(PartitionId::new(1)));
/// # Ok::<(), ddx_tenancy::RegistryError>(())
/// ```
#[derive(Debug)]
pub struct TenantRegistry {
    partitions: RwLock<HashMap<TenantId, PartitionId>>,
}

impl TenantRegistry {
    /// Creates a registry holding only the `default` tenant.
    pub fn new() -> Self {
        let mut partitions = HashMap::new();
        partitions.insert(TenantId::default_tenant(), PartitionId::DEFAULT);
        Self {
            partitions: RwLock::new(partitions),
        }
    }

    /// Creates a registry seeded with the given mappings.
    ///
    /// The `default` tenant is present regardless of the seed. Entries are
    /// validated exactly like [`register`](Self::register), so a malformed
    /// seed fails loudly instead of producing a partially populated registry.
    pub fn with_seed<I>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (TenantId, PartitionId)>,
    {
        let registry = Self::new();
        for (tenant, partition) in entries {
            registry.register(tenant, partition)?;
        }
        Ok(registry)
    }

    /// Registers a tenant or reassigns its partition.
    ///
    /// Registration is audited at info level. It fails on malformed
    /// identifiers, on assigning the reserved default partition to a client
    /// tenant, and on moving the `default` tenant off partition 0.
    pub fn register(
        &self,
        tenant: TenantId,
        partition: PartitionId,
    ) -> Result<(), RegistryError> {
        if !tenant.is_valid() {
            return Err(RegistryError::InvalidTenantId {
                id: tenant.as_str().to_string(),
            });
        }

        if tenant.is_default() {
            if !partition.is_default() {
                return Err(RegistryError::ReservedTenant {
                    tenant_id: tenant,
                    partition,
                });
            }
            // default -> 0 is present from construction
            return Ok(());
        }

        if partition.is_default() {
            return Err(RegistryError::ReservedPartition {
                tenant_id: tenant,
                partition,
            });
        }

        self.partitions.write().insert(tenant.clone(), partition);
        info!(tenant_id = %tenant, partition = %partition, "Registered tenant partition");
        Ok(())
    }

    /// Looks up the partition for a tenant.
    pub fn partition_of(&self, tenant: &TenantId) -> Option<PartitionId> {
        self.partitions.read().get(tenant).copied()
    }

    /// Returns `true` if the tenant is registered.
    pub fn contains(&self, tenant: &TenantId) -> bool {
        self.partitions.read().contains_key(tenant)
    }

    /// Returns the number of registered tenants, including `default`.
    pub fn len(&self) -> usize {
        self.partitions.read().len()
    }

    /// Returns `true` if the registry holds no tenants.
    ///
    /// Never true in practice, since `default` is present from construction.
    pub fn is_empty(&self) -> bool {
        self.partitions.read().is_empty()
    }

    /// Returns a sorted copy of the current mappings.
    pub fn snapshot(&self) -> Vec<(TenantId, PartitionId)> {
        let mut entries: Vec<_> = self
            .partitions
            .read()
            .iter()
            .map(|(tenant, partition)| (tenant.clone(), *partition))
            .collect();
        entries.sort();
        entries
    }
}

impl Default for TenantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_new_holds_default_tenant() {
        let registry = TenantRegistry::new();
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
        assert_eq!(
            registry.partition_of(&TenantId::default_tenant()),
            Some(PartitionId::DEFAULT)
        );
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = TenantRegistry::new();
        registry
            .register(TenantId::new("ddx-hamburg-clinic"), PartitionId::new(1))
            .unwrap();

        assert_eq!(
            registry.partition_of(&TenantId::new("ddx-hamburg-clinic")),
            Some(PartitionId::new(1))
        );
        assert!(registry.contains(&TenantId::new("ddx-hamburg-clinic")));
        assert_eq!(registry.partition_of(&TenantId::new("ddx-nowhere-clinic")), None);
    }

    #[test]
    fn test_lookup_is_case_normalized() {
        let registry = TenantRegistry::new();
        registry
            .register(TenantId::new("DDX-Hamburg-Clinic"), PartitionId::new(1))
            .unwrap();

        assert_eq!(
            registry.partition_of(&TenantId::new("  ddx-HAMBURG-clinic ")),
            Some(PartitionId::new(1))
        );
    }

    #[test]
    fn test_register_rejects_invalid_identifier() {
        let registry = TenantRegistry::new();
        let result = registry.register(TenantId::new("bad id"), PartitionId::new(1));
        assert!(matches!(
            result,
            Err(RegistryError::InvalidTenantId { .. })
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_rejects_reserved_partition() {
        let registry = TenantRegistry::new();
        let result = registry.register(TenantId::new("ddx-berlin-clinic"), PartitionId::DEFAULT);
        assert!(matches!(
            result,
            Err(RegistryError::ReservedPartition { .. })
        ));
        assert!(!registry.contains(&TenantId::new("ddx-berlin-clinic")));
    }

    #[test]
    fn test_register_rejects_remapping_default_tenant() {
        let registry = TenantRegistry::new();
        let result = registry.register(TenantId::default_tenant(), PartitionId::new(2));
        assert!(matches!(result, Err(RegistryError::ReservedTenant { .. })));

        // Re-stating default -> 0 is a no-op, not an error.
        registry
            .register(TenantId::default_tenant(), PartitionId::DEFAULT)
            .unwrap();
        assert_eq!(
            registry.partition_of(&TenantId::default_tenant()),
            Some(PartitionId::DEFAULT)
        );
    }

    #[test]
    fn test_register_overwrites_existing_mapping() {
        let registry = TenantRegistry::new();
        registry
            .register(TenantId::new("ddx-berlin-clinic"), PartitionId::new(2))
            .unwrap();
        registry
            .register(TenantId::new("ddx-berlin-clinic"), PartitionId::new(9))
            .unwrap();

        assert_eq!(
            registry.partition_of(&TenantId::new("ddx-berlin-clinic")),
            Some(PartitionId::new(9))
        );
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_with_seed() {
        let registry = TenantRegistry::with_seed(vec![
            (TenantId::new("ddx-hamburg-clinic"), PartitionId::new(1)),
            (TenantId::new("ddx-berlin-clinic"), PartitionId::new(2)),
        ])
        .unwrap();

        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.partition_of(&TenantId::default_tenant()),
            Some(PartitionId::DEFAULT)
        );
        assert_eq!(
            registry.partition_of(&TenantId::new("ddx-berlin-clinic")),
            Some(PartitionId::new(2))
        );
    }

    #[test]
    fn test_with_seed_rejects_invalid_entries() {
        let result = TenantRegistry::with_seed(vec![(
            TenantId::new("ddx-berlin-clinic"),
            PartitionId::DEFAULT,
        )]);
        assert!(matches!(
            result,
            Err(RegistryError::ReservedPartition { .. })
        ));
    }

    #[test]
    fn test_snapshot_is_sorted() {
        let registry = TenantRegistry::with_seed(vec![
            (TenantId::new("ddx-munich-clinic"), PartitionId::new(3)),
            (TenantId::new("ddx-berlin-clinic"), PartitionId::new(2)),
        ])
        .unwrap();

        let snapshot = registry.snapshot();
        let names: Vec<&str> = snapshot.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(
            names,
            vec!["ddx-berlin-clinic", "ddx-munich-clinic", "default"]
        );
    }

    #[test]
    fn test_concurrent_registration_and_lookup() {
        let registry = Arc::new(TenantRegistry::new());
        let mut handles = Vec::new();

        // Writers register disjoint tenants.
        for i in 0u32..8 {
            let registry = Arc::clone(&registry);
            handles.push(std::thread::spawn(move || {
                for j in 0u32..50 {
                    let tenant = TenantId::new(format!("ddx-clinic-{}-{}", i, j));
                    registry
                        .register(tenant, PartitionId::new(100 + i * 50 + j))
                        .unwrap();
                }
            }));
        }

        // Readers hammer lookups while the writers run.
        for _ in 0..4 {
            let registry = Arc::clone(&registry);
            handles.push(std::thread::spawn(move || {
                for _ in 0..200 {
                    let _ = registry.partition_of(&TenantId::new("ddx-clinic-0-0"));
                    assert_eq!(
                        registry.partition_of(&TenantId::default_tenant()),
                        Some(PartitionId::DEFAULT)
                    );
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.len(), 1 + 8 * 50);
        assert_eq!(
            registry.partition_of(&TenantId::new("ddx-clinic-7-49")),
            Some(PartitionId::new(100 + 7 * 50 + 49))
        );
    }
}
