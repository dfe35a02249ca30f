//! Tenant signal sources and extractors.
//!
//! Defines the sources from which a tenant identifier can be extracted and
//! the extractor chain that reads them, in priority order:
//!
//! 1. `X-Clinic-ID` header (primary method)
//! 2. Host subdomain (e.g. `hamburg.fhir.example.com`)
//! 3. URL path segment after `clinic` (e.g. `/fhir/clinic/hamburg/Patient`)

use std::fmt;
use std::net::IpAddr;

use axum::http::header::HeaderName;
use tracing::debug;

use ddx_tenancy::TenantId;

use crate::context::ClientAttributes;

/// Header name carrying the tenant identifier.
pub static X_CLINIC_ID: HeaderName = HeaderName::from_static("x-clinic-id");

/// Path component marking the following segment as a clinic name.
pub const CLINIC_PATH_MARKER: &str = "clinic";

/// Source from which a tenant identifier was extracted.
///
/// Sources are listed in priority order (highest to lowest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenantSource {
    /// Tenant taken from the `X-Clinic-ID` header (highest priority).
    Header,
    /// Tenant synthesized from the request host's first subdomain label.
    HostSubdomain,
    /// Tenant synthesized from the path segment after `clinic`.
    PathSegment,
}

impl TenantSource {
    /// Returns the priority of this source (higher = more authoritative).
    pub fn priority(&self) -> u8 {
        match self {
            TenantSource::Header => 3,
            TenantSource::HostSubdomain => 2,
            TenantSource::PathSegment => 1,
        }
    }

    /// Returns true if the tenant was supplied verbatim by the client
    /// rather than synthesized from a short clinic name.
    pub fn is_verbatim(&self) -> bool {
        matches!(self, TenantSource::Header)
    }
}

impl fmt::Display for TenantSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TenantSource::Header => write!(f, "header"),
            TenantSource::HostSubdomain => write!(f, "host_subdomain"),
            TenantSource::PathSegment => write!(f, "path_segment"),
        }
    }
}

impl Ord for TenantSource {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for TenantSource {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Trait for extracting a tenant identifier from one request signal.
///
/// Extractors are pure functions over the captured [`ClientAttributes`];
/// they never touch the registry and never mutate the request.
pub trait TenantSignalExtractor: Send + Sync {
    /// Attempts to extract a tenant identifier from the request attributes.
    fn extract(&self, attrs: &ClientAttributes) -> Option<TenantId>;

    /// Returns the source type this extractor handles.
    fn source_type(&self) -> TenantSource;
}

/// Extracts the tenant from the `X-Clinic-ID` header.
///
/// The header value is used directly (after the usual trim/lowercase
/// normalization); no naming convention is applied.
#[derive(Debug, Default)]
pub struct ClinicHeaderExtractor;

impl TenantSignalExtractor for ClinicHeaderExtractor {
    fn extract(&self, attrs: &ClientAttributes) -> Option<TenantId> {
        let tenant = attrs
            .headers()
            .get(&X_CLINIC_ID)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(TenantId::new)?;

        debug!(tenant_id = %tenant, "Clinic ID from header");
        Some(tenant)
    }

    fn source_type(&self) -> TenantSource {
        TenantSource::Header
    }
}

/// Extracts the tenant from the request host's first subdomain label.
///
/// `hamburg.fhir.example.com` yields `ddx-hamburg-clinic`. Hosts that are
/// `localhost`, IP literals, or have fewer than three dot-separated labels
/// never produce a signal.
#[derive(Debug, Default)]
pub struct HostSubdomainExtractor;

impl TenantSignalExtractor for HostSubdomainExtractor {
    fn extract(&self, attrs: &ClientAttributes) -> Option<TenantId> {
        let host = attrs.host()?;
        if !is_subdomain_candidate(host) {
            return None;
        }

        let subdomain = host.split('.').next().filter(|s| !s.is_empty())?;
        let tenant = TenantId::from_short_name(subdomain);
        debug!(tenant_id = %tenant, host = %host, "Clinic ID from subdomain");
        Some(tenant)
    }

    fn source_type(&self) -> TenantSource {
        TenantSource::HostSubdomain
    }
}

/// Extracts the tenant from the path segment following `clinic`.
///
/// `/fhir/clinic/hamburg/Patient` yields `ddx-hamburg-clinic`.
#[derive(Debug, Default)]
pub struct PathSegmentExtractor;

impl TenantSignalExtractor for PathSegmentExtractor {
    fn extract(&self, attrs: &ClientAttributes) -> Option<TenantId> {
        let mut segments = attrs.path().split('/');
        while let Some(segment) = segments.next() {
            if segment == CLINIC_PATH_MARKER {
                let name = segments.next().map(str::trim).filter(|s| !s.is_empty())?;
                let tenant = TenantId::from_short_name(name);
                debug!(tenant_id = %tenant, path = %attrs.path(), "Clinic ID from path");
                return Some(tenant);
            }
        }
        None
    }

    fn source_type(&self) -> TenantSource {
        TenantSource::PathSegment
    }
}

/// Returns true if the host can carry a subdomain tenant signal.
///
/// Loopback names and IP literals are never tenant signals: an IPv4 address
/// has four dot-separated "labels" but no subdomain.
fn is_subdomain_candidate(host: &str) -> bool {
    if host == "localhost" {
        return false;
    }
    let bare = host.strip_prefix('[').and_then(|h| h.strip_suffix(']'));
    if bare.unwrap_or(host).parse::<IpAddr>().is_ok() {
        return false;
    }
    host.split('.').count() > 2
}
