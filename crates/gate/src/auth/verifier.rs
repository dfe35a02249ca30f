//! Credential verification strategies.
//!
//! The gate checks bearer tokens through the [`CredentialVerifier`] trait so
//! that the verification scheme can change (rotating tokens, signed tokens)
//! without touching the gate's control flow.

/// Verifies an extracted bearer token.
///
/// Implementations must be pure decision functions: no I/O, no mutation,
/// safe to call from many requests at once.
pub trait CredentialVerifier: Send + Sync {
    /// Returns `true` if the token is acceptable.
    fn verify(&self, token: &str) -> bool;

    /// Short scheme name for log lines.
    fn name(&self) -> &'static str;
}

/// Verifies tokens against a single process-wide shared secret.
///
/// The minimal shipped strategy: one fixed string, compared byte for byte,
/// with process-lifetime validity and no expiry or rotation state.
#[derive(Debug, Clone)]
pub struct StaticTokenVerifier {
    expected: String,
}

impl StaticTokenVerifier {
    /// Creates a verifier for the given shared secret.
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl CredentialVerifier for StaticTokenVerifier {
    fn verify(&self, token: &str) -> bool {
        self.expected.as_bytes() == token.as_bytes()
    }

    fn name(&self) -> &'static str {
        "static-token"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_verifies() {
        let verifier = StaticTokenVerifier::new("ddx-api-token-2024");
        assert!(verifier.verify("ddx-api-token-2024"));
    }

    #[test]
    fn test_mismatch_rejected() {
        let verifier = StaticTokenVerifier::new("ddx-api-token-2024");
        assert!(!verifier.verify("ddx-api-token-2023"));
        assert!(!verifier.verify(""));
        assert!(!verifier.verify("ddx-api-token-2024 "));
        assert!(!verifier.verify("DDX-API-TOKEN-2024"));
    }

    #[test]
    fn test_name() {
        assert_eq!(StaticTokenVerifier::new("x").name(), "static-token");
    }
}
