//! Tenant identifier type.
//!
//! This module defines the [`TenantId`] type, a case-normalized identifier
//! for tenants, plus the clinic naming convention used across the gateway.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The default tenant identifier, permanently mapped to the default partition.
pub const DEFAULT_TENANT: &str = "default";

/// Prefix applied by the clinic naming convention.
pub const TENANT_PREFIX: &str = "ddx-";

/// Suffix applied by the clinic naming convention.
pub const TENANT_SUFFIX: &str = "-clinic";

/// An opaque, case-normalized tenant identifier.
///
/// Identifiers are trimmed and lowercased at construction, so equality,
/// hashing, and registry lookups never depend on client casing or stray
/// whitespace. Full clinic identifiers follow the convention
/// `ddx-<name>-clinic`; [`TenantId::from_short_name`] wraps a bare clinic
/// name into that form.
///
/// # Examples
///
/// ```
/// use ddx_tenancy::TenantId;
///
/// let tenant = TenantId::new("  DDX-Hamburg-Clinic ");
/// assert_eq!(tenant.as_str(), "ddx-hamburg-clinic");
/// assert_eq!(tenant, TenantId::from_short_name("Hamburg"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct TenantId(String);

impl TenantId {
    /// Creates a tenant id, trimming and lowercasing the input.
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(id.as_ref().trim().to_lowercase())
    }

    /// Returns the default tenant id.
    ///
    /// # Examples
    ///
    /// ```
    /// use ddx_tenancy::TenantId;
    ///
    /// assert!(TenantId::default_tenant().is_default());
    /// ```
    pub fn default_tenant() -> Self {
        Self(DEFAULT_TENANT.to_string())
    }

    /// Wraps a bare clinic name into the full identifier convention.
    ///
    /// # Examples
    ///
    /// ```
    /// use ddx_tenancy::TenantId;
    ///
    /// let tenant = TenantId::from_short_name("berlin");
    /// assert_eq!(tenant.as_str(), "ddx-berlin-clinic");
    /// ```
    pub fn from_short_name(name: impl AsRef<str>) -> Self {
        Self::new(format!(
            "{}{}{}",
            TENANT_PREFIX,
            name.as_ref().trim(),
            TENANT_SUFFIX
        ))
    }

    /// Returns the tenant id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this is the default tenant.
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_TENANT
    }

    /// Returns `true` if the identifier is well-formed.
    pub fn is_valid(&self) -> bool {
        is_valid_tenant_id(&self.0)
    }
}

/// Validates that a string is a well-formed tenant identifier.
///
/// Identifiers must be non-empty, at most 64 characters, and consist of
/// ASCII alphanumerics, hyphens, and underscores.
pub fn is_valid_tenant_id(s: &str) -> bool {
    !s.is_empty()
        && s.len() <= 64
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TenantId({})", self.0)
    }
}

impl FromStr for TenantId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TenantId::new(s))
    }
}

impl From<&str> for TenantId {
    fn from(s: &str) -> Self {
        TenantId::new(s)
    }
}

impl From<String> for TenantId {
    fn from(s: String) -> Self {
        TenantId::new(s)
    }
}

impl AsRef<str> for TenantId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
