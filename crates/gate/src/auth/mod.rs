//! Bearer-token authentication gate.
//!
//! The [`AuthGate`] rejects any request that does not carry a valid bearer
//! credential, except requests to an allow-list of public paths. It is a
//! pure decision function over the request path and `Authorization` header:
//! no network, no storage, no request-state mutation.
//!
//! The gate can be disabled process-wide (`--auth-enabled false`, the
//! default). **Disabled means every request passes unchecked** — this is an
//! explicit local-development operational mode, not something to run in
//! production.

mod verifier;

pub use verifier::{CredentialVerifier, StaticTokenVerifier};

use tracing::{debug, warn};

use crate::error::AuthError;

/// The credential scheme prefix the gate requires.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Default public-path allow-list entries (substring match).
pub const DEFAULT_PUBLIC_PATHS: &[&str] = &["/metadata", "/health", "/.well-known/", "/oauth/"];

/// How a request made it past the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthDecision {
    /// The gate is disabled; nothing was checked.
    Disabled,
    /// The path matched the public allow-list; no credential required.
    Public,
    /// A bearer credential was presented and verified.
    Verified,
}

/// Validates bearer credentials at the request boundary.
///
/// Check order, for an enabled gate:
///
/// 1. public path → pass with no credential check;
/// 2. missing/empty `Authorization` header → [`AuthError::MissingCredential`];
/// 3. header not starting with `Bearer ` → [`AuthError::MalformedCredential`];
/// 4. trimmed token fails verification → [`AuthError::InvalidCredential`];
/// 5. otherwise pass.
///
/// Every rejection is logged at warn level with the rejected path.
pub struct AuthGate {
    enabled: bool,
    public_paths: Vec<String>,
    verifier: Box<dyn CredentialVerifier>,
}

impl AuthGate {
    /// Creates a gate with the given verifier and public-path allow-list.
    pub fn new(
        enabled: bool,
        public_paths: Vec<String>,
        verifier: Box<dyn CredentialVerifier>,
    ) -> Self {
        Self {
            enabled,
            public_paths,
            verifier,
        }
    }

    /// Creates a gate with the default allow-list and a static token.
    pub fn with_static_token(enabled: bool, token: impl Into<String>) -> Self {
        Self::new(
            enabled,
            DEFAULT_PUBLIC_PATHS.iter().map(|s| s.to_string()).collect(),
            Box::new(StaticTokenVerifier::new(token)),
        )
    }

    /// Whether the gate checks credentials at all.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns `true` if the path matches the public allow-list.
    ///
    /// Matching is by substring, so `/fhir/metadata` is public when the
    /// allow-list contains `/metadata`.
    pub fn is_public_path(&self, path: &str) -> bool {
        self.public_paths.iter().any(|p| path.contains(p.as_str()))
    }

    /// Checks a request's path and `Authorization` header against the gate.
    pub fn check(
        &self,
        path: &str,
        auth_header: Option<&str>,
    ) -> Result<AuthDecision, AuthError> {
        if !self.enabled {
            debug!(path = %path, "Auth gate disabled, allowing request");
            return Ok(AuthDecision::Disabled);
        }

        if self.is_public_path(path) {
            debug!(path = %path, "Allowing public endpoint");
            return Ok(AuthDecision::Public);
        }

        let header = match auth_header {
            Some(h) if !h.is_empty() => h,
            _ => {
                warn!(path = %path, "Missing Authorization header");
                return Err(AuthError::MissingCredential);
            }
        };

        let Some(token) = header.strip_prefix(BEARER_PREFIX) else {
            warn!(path = %path, "Authorization header is not a bearer token");
            return Err(AuthError::MalformedCredential);
        };

        if !self.verifier.verify(token.trim()) {
            warn!(path = %path, scheme = %self.verifier.name(), "Credential rejected");
            return Err(AuthError::InvalidCredential);
        }

        debug!(path = %path, "Successfully authenticated request");
        Ok(AuthDecision::Verified)
    }
}

impl std::fmt::Debug for AuthGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGate")
            .field("enabled", &self.enabled)
            .field("public_paths", &self.public_paths)
            .field("verifier", &self.verifier.name())
            .finish()
    }
}
