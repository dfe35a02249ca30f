//! Per-request context: origin classification and resolution state.
//!
//! Every request passing through the gate carries a [`RequestContext`] in its
//! extensions. The context records where the request came from ([`Origin`]),
//! whether credentials were verified, and which partition it was routed to.

use axum::http::{HeaderMap, header, request::Parts};

use ddx_tenancy::PartitionId;

/// Request attributes captured at the boundary for tenant extraction.
///
/// A snapshot of the parts of an incoming request that tenant signal
/// extractors are allowed to inspect: headers, the normalized host, and the
/// URI path. Extractors never see the body.
#[derive(Debug, Clone)]
pub struct ClientAttributes {
    headers: HeaderMap,
    host: Option<String>,
    path: String,
}

impl ClientAttributes {
    /// Captures attributes from request parts.
    ///
    /// The host is taken from the `Host` header, falling back to the URI
    /// authority for HTTP/2 requests that carry it there. Any port suffix is
    /// stripped and the result lowercased.
    pub fn from_parts(parts: &Parts) -> Self {
        let host = parts
            .headers
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
            .or_else(|| parts.uri.host())
            .map(strip_port);

        Self {
            headers: parts.headers.clone(),
            host,
            path: parts.uri.path().to_string(),
        }
    }

    /// Request headers as received.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Normalized host (lowercase, no port), if the request carried one.
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// URI path of the request.
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Removes a trailing `:port` from a host value and lowercases it.
///
/// IPv6 literals keep their brackets: `[::1]:8080` becomes `[::1]`.
fn strip_port(host: &str) -> String {
    let trimmed = host.trim();
    let without_port = match trimmed.rfind(']') {
        // Bracketed IPv6 literal: keep everything through the bracket.
        Some(bracket) => &trimmed[..=bracket],
        None => match trimmed.rfind(':') {
            Some(colon) => &trimmed[..colon],
            None => trimmed,
        },
    };
    without_port.to_lowercase()
}

/// Where a request entered the system.
#[derive(Debug, Clone)]
pub enum Origin {
    /// Arrived over the network boundary; carries the attributes tenant
    /// extraction may inspect.
    External(ClientAttributes),
    /// Spawned by the system itself (scheduled jobs, internal maintenance).
    /// Internal requests are pinned to the default partition and never
    /// consult tenant signals.
    Internal,
}

/// Mutable per-request state threaded through the middleware chain.
///
/// Inserted into request extensions by the first gate middleware that runs
/// and enriched by each subsequent stage.
#[derive(Debug, Clone)]
pub struct RequestContext {
    origin: Origin,
    authenticated: bool,
    partition: Option<PartitionId>,
}

impl RequestContext {
    /// Builds a context for an external request from its parts.
    pub fn external_from_parts(parts: &Parts) -> Self {
        Self {
            origin: Origin::External(ClientAttributes::from_parts(parts)),
            authenticated: false,
            partition: None,
        }
    }

    /// Builds a context for a system-originated request.
    pub fn internal() -> Self {
        Self {
            origin: Origin::Internal,
            authenticated: false,
            partition: None,
        }
    }

    /// The request origin.
    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// Whether the request originated inside the system.
    pub fn is_internal(&self) -> bool {
        matches!(self.origin, Origin::Internal)
    }

    /// Whether credentials were presented and verified.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Records successful credential verification.
    pub fn mark_authenticated(&mut self) {
        self.authenticated = true;
    }

    /// The partition this request was routed to, once resolved.
    pub fn partition(&self) -> Option<PartitionId> {
        self.partition
    }

    /// Records the resolved partition.
    pub fn assign_partition(&mut self, partition: PartitionId) {
        self.partition = Some(partition);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn make_parts(uri: &str, headers: &[(&str, &str)]) -> Parts {
        let mut builder = Request::builder().uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let request = builder.body(()).unwrap();
        let (parts, _) = request.into_parts();
        parts
    }

    #[test]
    fn test_attributes_capture_host_header() {
        let parts = make_parts("/Patient", &[("host", "berlin.ddx.example.org")]);
        let attrs = ClientAttributes::from_parts(&parts);

        assert_eq!(attrs.host(), Some("berlin.ddx.example.org"));
        assert_eq!(attrs.path(), "/Patient");
    }

    #[test]
    fn test_attributes_fall_back_to_uri_authority() {
        let parts = make_parts("http://munich.ddx.example.org/Patient", &[]);
        let attrs = ClientAttributes::from_parts(&parts);

        assert_eq!(attrs.host(), Some("munich.ddx.example.org"));
    }

    #[test]
    fn test_attributes_without_host() {
        let parts = make_parts("/Patient", &[]);
        let attrs = ClientAttributes::from_parts(&parts);

        assert_eq!(attrs.host(), None);
    }

    #[test]
    fn test_strip_port_variants() {
        assert_eq!(strip_port("example.org"), "example.org");
        assert_eq!(strip_port("Example.Org:8080"), "example.org");
        assert_eq!(strip_port("localhost:3000"), "localhost");
        assert_eq!(strip_port("[::1]:8080"), "[::1]");
        assert_eq!(strip_port("[2001:db8::1]"), "[2001:db8::1]");
        assert_eq!(strip_port(" padded.example.org "), "padded.example.org");
    }

    #[test]
    fn test_context_defaults() {
        let parts = make_parts("/Patient", &[]);
        let ctx = RequestContext::external_from_parts(&parts);

        assert!(!ctx.is_internal());
        assert!(!ctx.is_authenticated());
        assert_eq!(ctx.partition(), None);
    }

    #[test]
    fn test_context_transitions() {
        let parts = make_parts("/Patient", &[]);
        let mut ctx = RequestContext::external_from_parts(&parts);

        ctx.mark_authenticated();
        ctx.assign_partition(PartitionId::new(2));

        assert!(ctx.is_authenticated());
        assert_eq!(ctx.partition(), Some(PartitionId::new(2)));
    }

    #[test]
    fn test_internal_context() {
        let ctx = RequestContext::internal();

        assert!(ctx.is_internal());
        assert!(matches!(ctx.origin(), Origin::Internal));
    }
}
