//! Common test utilities for gateway integration tests.

use axum_test::TestServer;

use ddx_gate::{GateState, GatewayConfig, create_app_with_state};

/// The token the test configuration expects.
pub const API_TOKEN: &str = "ddx-api-token-2024";

/// Creates a test server and its state from the given configuration.
///
/// The returned state shares its registry with the server, so tests can
/// register tenants directly and observe the effect over HTTP.
pub fn create_test_server(config: GatewayConfig) -> (TestServer, GateState) {
    let state = GateState::from_config(config).expect("Failed to build gate state");
    let app = create_app_with_state(state.clone());
    let server = TestServer::new(app).expect("Failed to create test server");
    (server, state)
}

/// Creates a test server with auth enabled and the default tenant seed.
pub fn create_default_server() -> (TestServer, GateState) {
    create_test_server(GatewayConfig::for_testing())
}

/// Creates a test server with the auth gate disabled.
pub fn create_unauthenticated_server() -> (TestServer, GateState) {
    let config = GatewayConfig {
        auth_enabled: false,
        ..GatewayConfig::for_testing()
    };
    create_test_server(config)
}

/// Formats a bearer Authorization header value.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
