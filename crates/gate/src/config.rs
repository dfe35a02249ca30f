//! Gateway configuration.
//!
//! This module provides configuration for the gateway, supporting both
//! command line arguments and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `DDX_GATEWAY_PORT` | 8090 | Server port |
//! | `DDX_GATEWAY_HOST` | 127.0.0.1 | Host to bind |
//! | `DDX_LOG_LEVEL` | info | Log level |
//! | `DDX_AUTH_ENABLED` | false | Enable the bearer-token auth gate |
//! | `DDX_API_TOKEN` | ddx-api-token-2024 | Expected bearer token |
//! | `DDX_PUBLIC_PATHS` | /metadata,/health,/.well-known/,/oauth/ | Public path allow-list |
//! | `DDX_CLINIC_PARTITIONS` | see below | Seed tenant map (`tenant=partition` pairs) |
//! | `DDX_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//!
//! **The auth gate is disabled by default.** This is an explicit operational
//! mode for local development: with `DDX_AUTH_ENABLED=false` every request
//! passes unchecked. Production deployments must set it to `true`.
//!
//! # Example
//!
//! ```rust
//! use ddx_gate::GatewayConfig;
//!
//! // Create from environment
//! let config = GatewayConfig::from_env();
//!
//! // Or create programmatically
//! let config = GatewayConfig {
//!     port: 3000,
//!     auth_enabled: true,
//!     ..Default::default()
//! };
//! ```

use clap::Parser;

use ddx_tenancy::{PartitionId, TenantId};

/// Default seed mapping of clinics to partitions.
pub const DEFAULT_CLINIC_PARTITIONS: &str = "ddx-hamburg-clinic=1,ddx-berlin-clinic=2,\
ddx-munich-clinic=3,ddx-frankfurt-clinic=4,ddx-cologne-clinic=5,ddx-shared-clinic=6";

/// Gateway configuration.
///
/// This struct can be constructed from environment variables using
/// [`GatewayConfig::from_env`], from command line arguments using
/// [`GatewayConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "ddx-gateway")]
#[command(about = "DDX clinical gateway - authentication and tenant partition enforcement")]
pub struct GatewayConfig {
    /// Port to listen on.
    #[arg(short, long, env = "DDX_GATEWAY_PORT", default_value = "8090")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "DDX_GATEWAY_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "DDX_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Enable the bearer-token auth gate (disabled by default for local
    /// development; every request passes when disabled).
    #[arg(long, env = "DDX_AUTH_ENABLED", default_value = "false")]
    pub auth_enabled: bool,

    /// Expected bearer token for the static verifier.
    #[arg(long, env = "DDX_API_TOKEN", default_value = "ddx-api-token-2024")]
    pub api_token: String,

    /// Public path allow-list (comma-separated substrings).
    #[arg(
        long,
        env = "DDX_PUBLIC_PATHS",
        default_value = "/metadata,/health,/.well-known/,/oauth/"
    )]
    pub public_paths: String,

    /// Seed tenant-to-partition mapping (comma-separated `tenant=partition`
    /// pairs). The `default` tenant maps to partition 0 regardless.
    #[arg(long, env = "DDX_CLINIC_PARTITIONS", default_value = DEFAULT_CLINIC_PARTITIONS)]
    pub clinic_partitions: String,

    /// Request timeout in seconds.
    #[arg(long, env = "DDX_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: 8090,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            auth_enabled: false,
            api_token: "ddx-api-token-2024".to_string(),
            public_paths: "/metadata,/health,/.well-known/,/oauth/".to_string(),
            clinic_partitions: DEFAULT_CLINIC_PARTITIONS.to_string(),
            request_timeout: 30,
        }
    }
}

impl GatewayConfig {
    /// Creates a GatewayConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the public path allow-list as a vector.
    pub fn public_path_list(&self) -> Vec<String> {
        self.public_paths
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Parses the seed tenant mapping.
    ///
    /// Each entry must be a `tenant=partition` pair; malformed pairs are
    /// rejected with a description of the offending entry, never silently
    /// skipped.
    pub fn partition_seed(&self) -> Result<Vec<(TenantId, PartitionId)>, String> {
        let mut entries = Vec::new();
        for pair in self
            .clinic_partitions
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            let (tenant, partition) = pair
                .split_once('=')
                .ok_or_else(|| format!("Malformed seed entry (expected tenant=partition): {pair:?}"))?;

            let partition: PartitionId = partition
                .parse()
                .map_err(|_| format!("Invalid partition id in seed entry: {pair:?}"))?;

            entries.push((TenantId::new(tenant), partition));
        }
        Ok(entries)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.auth_enabled && self.api_token.trim().is_empty() {
            errors.push("API token cannot be empty when auth is enabled".to_string());
        }

        if let Err(e) = self.partition_seed() {
            errors.push(e);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// Uses a short timeout and the auth gate enabled so tests exercise the
    /// credential check by default. Tests drive the router in process, so
    /// the port is never bound.
    pub fn for_testing() -> Self {
        Self {
            port: 8099,
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            auth_enabled: true,
            api_token: "ddx-api-token-2024".to_string(),
            public_paths: "/metadata,/health,/.well-known/,/oauth/".to_string(),
            clinic_partitions: DEFAULT_CLINIC_PARTITIONS.to_string(),
            request_timeout: 5, // Shorter timeout for tests
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GatewayConfig::default();
        assert_eq!(config.port, 8090);
        assert_eq!(config.host, "127.0.0.1");
        assert!(!config.auth_enabled);
        assert_eq!(config.api_token, "ddx-api-token-2024");
    }

    #[test]
    fn test_socket_addr() {
        let config = GatewayConfig {
            port: 3000,
            host: "0.0.0.0".to_string(),
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_public_path_list() {
        let config = GatewayConfig::default();
        assert_eq!(
            config.public_path_list(),
            vec!["/metadata", "/health", "/.well-known/", "/oauth/"]
        );

        let config = GatewayConfig {
            public_paths: " /metadata , /status ,".to_string(),
            ..Default::default()
        };
        assert_eq!(config.public_path_list(), vec!["/metadata", "/status"]);
    }

    #[test]
    fn test_partition_seed_default() {
        let config = GatewayConfig::default();
        let seed = config.partition_seed().unwrap();
        assert_eq!(seed.len(), 6);
        assert!(seed.contains(&(TenantId::new("ddx-berlin-clinic"), PartitionId::new(2))));
        assert!(seed.contains(&(TenantId::new("ddx-shared-clinic"), PartitionId::new(6))));
    }

    #[test]
    fn test_partition_seed_rejects_malformed_pairs() {
        let config = GatewayConfig {
            clinic_partitions: "ddx-hamburg-clinic".to_string(),
            ..Default::default()
        };
        assert!(config.partition_seed().is_err());

        let config = GatewayConfig {
            clinic_partitions: "ddx-hamburg-clinic=one".to_string(),
            ..Default::default()
        };
        assert!(config.partition_seed().is_err());

        // Negative partitions are rejected at the parsing boundary.
        let config = GatewayConfig {
            clinic_partitions: "ddx-hamburg-clinic=-1".to_string(),
            ..Default::default()
        };
        assert!(config.partition_seed().is_err());
    }

    #[test]
    fn test_validate_valid() {
        assert!(GatewayConfig::default().validate().is_ok());
        assert!(GatewayConfig::for_testing().validate().is_ok());
    }

    #[test]
    fn test_validate_catches_errors() {
        let config = GatewayConfig {
            port: 0,
            request_timeout: 0,
            auth_enabled: true,
            api_token: "  ".to_string(),
            clinic_partitions: "broken".to_string(),
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
    }
}
