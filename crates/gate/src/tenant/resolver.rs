//! Tenant classification and partition resolution.
//!
//! The [`TenantResolver`] decides, once per request, which isolation
//! partition the request may operate against. It runs the extractor chain
//! in priority order (header, host subdomain, path segment) and applies a
//! single enforcement policy across all hooks — see [`TenantResolver::resolve`].

use std::sync::Arc;

use axum::http::Method;
use tracing::{debug, warn};

use ddx_tenancy::{PartitionId, TenantId, TenantRegistry};

use crate::context::{Origin, RequestContext};
use crate::error::TenantError;

use super::source::{
    ClinicHeaderExtractor, HostSubdomainExtractor, PathSegmentExtractor, TenantSignalExtractor,
    TenantSource,
};

/// How a request was classified for partition purposes.
///
/// Exactly one classification applies per request, decided once and reused
/// for every hook the request passes through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The system generated this request itself; tenant extraction is
    /// skipped entirely and the default partition applies.
    System,
    /// An external request carrying no resolvable tenant signal.
    Unidentified,
    /// An external request that identified a tenant.
    Identified {
        /// The extracted tenant identifier.
        tenant: TenantId,
        /// Where the identifier came from.
        source: TenantSource,
    },
}

/// The storage pointcut a resolution is made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartitionHook {
    /// Read-type operations; best-effort, may fall back to the default
    /// partition when no tenant is resolvable.
    Read,
    /// Create-type operations; isolation-requiring.
    Create,
    /// Any other operation (including deletes); isolation-requiring.
    Any,
}

impl PartitionHook {
    /// Maps an HTTP method to the hook it resolves under.
    pub fn from_method(method: &Method) -> Self {
        if method == Method::GET || method == Method::HEAD {
            PartitionHook::Read
        } else if method == Method::POST || method == Method::PUT || method == Method::PATCH {
            PartitionHook::Create
        } else {
            PartitionHook::Any
        }
    }

    /// Whether this hook fails closed when no tenant is resolvable.
    pub fn requires_isolation(&self) -> bool {
        !matches!(self, PartitionHook::Read)
    }
}

impl std::fmt::Display for PartitionHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PartitionHook::Read => write!(f, "read"),
            PartitionHook::Create => write!(f, "create"),
            PartitionHook::Any => write!(f, "any"),
        }
    }
}

/// Resolves requests to isolation partitions.
///
/// Resolution policy, uniform across hooks:
///
/// | Classification      | Read              | Create / Any      |
/// |---------------------|-------------------|-------------------|
/// | System              | default partition | default partition |
/// | Unidentified        | default partition | `MissingTenant`   |
/// | Identified, known   | mapped partition  | mapped partition  |
/// | Identified, unknown | `UnknownTenant`   | `UnknownTenant`   |
///
/// Unknown tenants fail closed on every hook: an explicitly supplied but
/// unregistered identifier is a client error, and falling back would serve
/// default-partition data under a tenant's name. Reads with no signal fall
/// back to the default partition, which covers unauthenticated discovery
/// endpoints.
pub struct TenantResolver {
    registry: Arc<TenantRegistry>,
    extractors: Vec<Box<dyn TenantSignalExtractor>>,
}

impl TenantResolver {
    /// Creates a resolver over the given registry with the standard
    /// extractor chain (header, host subdomain, path segment).
    pub fn new(registry: Arc<TenantRegistry>) -> Self {
        Self {
            registry,
            extractors: vec![
                Box::new(ClinicHeaderExtractor),
                Box::new(HostSubdomainExtractor),
                Box::new(PathSegmentExtractor),
            ],
        }
    }

    /// Creates a resolver with a custom extractor chain, tried in order.
    pub fn with_extractors(
        registry: Arc<TenantRegistry>,
        extractors: Vec<Box<dyn TenantSignalExtractor>>,
    ) -> Self {
        Self {
            registry,
            extractors,
        }
    }

    /// The registry this resolver consults.
    pub fn registry(&self) -> &Arc<TenantRegistry> {
        &self.registry
    }

    /// Classifies a request: system origin, unidentified, or identified.
    ///
    /// Pure function of the context; the first extractor that produces a
    /// signal wins.
    pub fn classify(&self, ctx: &RequestContext) -> Classification {
        let attrs = match ctx.origin() {
            Origin::Internal => {
                debug!("System origin, skipping tenant extraction");
                return Classification::System;
            }
            Origin::External(attrs) => attrs,
        };

        for extractor in &self.extractors {
            if let Some(tenant) = extractor.extract(attrs) {
                return Classification::Identified {
                    tenant,
                    source: extractor.source_type(),
                };
            }
        }

        Classification::Unidentified
    }

    /// Resolves the partition for a request under the given hook.
    ///
    /// Idempotent: the same context and hook always yield the same partition
    /// or the same error kind, with no state mutation.
    pub fn resolve(
        &self,
        ctx: &RequestContext,
        hook: PartitionHook,
    ) -> Result<PartitionId, TenantError> {
        match self.classify(ctx) {
            Classification::System => {
                debug!(hook = %hook, "System operation, using default partition");
                Ok(PartitionId::DEFAULT)
            }
            Classification::Unidentified => {
                if hook.requires_isolation() {
                    warn!(hook = %hook, "No tenant identification for isolation-requiring operation");
                    Err(TenantError::MissingTenant)
                } else {
                    debug!(hook = %hook, "No tenant signal, using default partition");
                    Ok(PartitionId::DEFAULT)
                }
            }
            Classification::Identified { tenant, source } => {
                match self.registry.partition_of(&tenant) {
                    Some(partition) => {
                        debug!(
                            tenant_id = %tenant,
                            partition = %partition,
                            source = %source,
                            hook = %hook,
                            "Assigned partition for tenant"
                        );
                        Ok(partition)
                    }
                    None => {
                        warn!(tenant_id = %tenant, source = %source, hook = %hook, "Unknown tenant");
                        Err(TenantError::UnknownTenant { tenant_id: tenant })
                    }
                }
            }
        }
    }
}
