//! Integration tests for the bearer-token auth gate.
//!
//! Covers the credential check order (missing, malformed, invalid, valid),
//! the public-path allow-list, and the disabled-gate development mode.

mod common;

use axum::http::{HeaderName, HeaderValue, StatusCode};

use common::{API_TOKEN, bearer, create_default_server, create_unauthenticated_server};

const AUTHORIZATION: HeaderName = HeaderName::from_static("authorization");
const X_CLINIC_ID: HeaderName = HeaderName::from_static("x-clinic-id");

// =============================================================================
// Enabled Gate
// =============================================================================

mod enabled_gate {
    use super::*;

    #[tokio::test]
    async fn test_missing_credential_is_rejected() {
        let (server, _) = create_default_server();

        let response = server.get("/Patient/123").await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = response.json();
        assert_eq!(body["resourceType"], "OperationOutcome");
        assert_eq!(body["issue"][0]["code"], "login");
        assert!(
            body["issue"][0]["details"]["text"]
                .as_str()
                .unwrap()
                .contains("no credential")
        );
    }

    #[tokio::test]
    async fn test_malformed_credential_is_rejected() {
        let (server, _) = create_default_server();

        let response = server
            .get("/Patient/123")
            .add_header(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = response.json();
        assert!(
            body["issue"][0]["details"]["text"]
                .as_str()
                .unwrap()
                .contains("not a bearer token")
        );
    }

    #[tokio::test]
    async fn test_invalid_token_is_rejected() {
        let (server, _) = create_default_server();

        let response = server
            .get("/Patient/123")
            .add_header(
                AUTHORIZATION,
                HeaderValue::from_str(&bearer("wrong-token")).unwrap(),
            )
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_valid_token_passes() {
        let (server, _) = create_default_server();

        let response = server
            .get("/Patient/123")
            .add_header(
                AUTHORIZATION,
                HeaderValue::from_str(&bearer(API_TOKEN)).unwrap(),
            )
            .add_header(X_CLINIC_ID, HeaderValue::from_static("ddx-hamburg-clinic"))
            .await;

        response.assert_status_ok();
    }

    #[tokio::test]
    async fn test_rejection_happens_before_tenant_resolution() {
        let (server, _) = create_default_server();

        // Unknown tenant plus missing credential: the 401 wins because the
        // auth gate is outermost.
        let response = server
            .get("/Patient/123")
            .add_header(X_CLINIC_ID, HeaderValue::from_static("ddx-nowhere-clinic"))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }
}

// =============================================================================
// Public Paths
// =============================================================================

mod public_paths {
    use super::*;

    #[tokio::test]
    async fn test_metadata_requires_no_credential() {
        let (server, _) = create_default_server();

        let response = server.get("/metadata").await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["resourceType"], "CapabilityStatement");
    }

    #[tokio::test]
    async fn test_health_requires_no_credential() {
        let (server, _) = create_default_server();

        let response = server.get("/health").await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["auth_enabled"], true);
    }

    #[tokio::test]
    async fn test_public_match_is_by_substring() {
        let (server, _) = create_default_server();

        // The allow-list entry is "/metadata"; a prefixed path still matches.
        let response = server.get("/fhir/metadata").await;
        response.assert_status_ok();
    }

    #[tokio::test]
    async fn test_public_path_ignores_bad_credentials() {
        let (server, _) = create_default_server();

        let response = server
            .get("/metadata")
            .add_header(
                AUTHORIZATION,
                HeaderValue::from_str(&bearer("wrong-token")).unwrap(),
            )
            .await;

        response.assert_status_ok();
    }
}

// =============================================================================
// Disabled Gate (Development Mode)
// =============================================================================

mod disabled_gate {
    use super::*;

    #[tokio::test]
    async fn test_everything_passes_without_credentials() {
        let (server, _) = create_unauthenticated_server();

        let response = server
            .get("/Patient/123")
            .add_header(X_CLINIC_ID, HeaderValue::from_static("ddx-hamburg-clinic"))
            .await;

        response.assert_status_ok();
    }

    #[tokio::test]
    async fn test_tenant_enforcement_still_applies() {
        let (server, _) = create_unauthenticated_server();

        // Auth is bypassed, but an unknown tenant still fails closed.
        let response = server
            .get("/Patient/123")
            .add_header(X_CLINIC_ID, HeaderValue::from_static("ddx-nowhere-clinic"))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}
