//! Application state for the gateway.
//!
//! This module defines the shared state available to all middleware and
//! handlers: the auth gate, the tenant resolver, the registry they share,
//! and the gateway configuration.

use std::sync::Arc;

use ddx_tenancy::TenantRegistry;

use crate::auth::{AuthGate, StaticTokenVerifier};
use crate::config::GatewayConfig;
use crate::error::{GateError, GateResult};
use crate::tenant::TenantResolver;

/// Shared application state for the gateway.
///
/// All fields are behind `Arc`, so cloning the state per request is cheap
/// and every clone observes the same registry.
pub struct GateState {
    registry: Arc<TenantRegistry>,
    auth_gate: Arc<AuthGate>,
    resolver: Arc<TenantResolver>,
    config: Arc<GatewayConfig>,
}

impl Clone for GateState {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            auth_gate: Arc::clone(&self.auth_gate),
            resolver: Arc::clone(&self.resolver),
            config: Arc::clone(&self.config),
        }
    }
}

impl GateState {
    /// Creates state from explicit components.
    ///
    /// The resolver is built over the given registry, so lookups and
    /// administrative registrations observe the same mapping.
    pub fn new(registry: Arc<TenantRegistry>, auth_gate: AuthGate, config: GatewayConfig) -> Self {
        let resolver = TenantResolver::new(Arc::clone(&registry));
        Self {
            registry,
            auth_gate: Arc::new(auth_gate),
            resolver: Arc::new(resolver),
            config: Arc::new(config),
        }
    }

    /// Builds state from configuration: seeds the registry and constructs
    /// the auth gate with a static-token verifier.
    pub fn from_config(config: GatewayConfig) -> GateResult<Self> {
        let seed = config
            .partition_seed()
            .map_err(|message| GateError::BadRequest { message })?;
        let registry = Arc::new(TenantRegistry::with_seed(seed)?);

        let auth_gate = AuthGate::new(
            config.auth_enabled,
            config.public_path_list(),
            Box::new(StaticTokenVerifier::new(config.api_token.clone())),
        );

        Ok(Self::new(registry, auth_gate, config))
    }

    /// Returns the tenant registry.
    pub fn registry(&self) -> &Arc<TenantRegistry> {
        &self.registry
    }

    /// Returns the auth gate.
    pub fn auth_gate(&self) -> &AuthGate {
        &self.auth_gate
    }

    /// Returns the tenant resolver.
    pub fn resolver(&self) -> &TenantResolver {
        &self.resolver
    }

    /// Returns the gateway configuration.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}
