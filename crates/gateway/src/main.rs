//! DDX Clinical Gateway
//!
//! Authenticates inbound requests and resolves each one to an isolated
//! tenant partition before it reaches the clinical data service.

use clap::Parser;
use ddx_gate::{GatewayConfig, create_app, init_logging};
use tracing::info;

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &GatewayConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Gateway listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = GatewayConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        auth_enabled = config.auth_enabled,
        "Starting DDX Clinical Gateway"
    );
    if !config.auth_enabled {
        info!("Auth gate is DISABLED (development mode); set DDX_AUTH_ENABLED=true in production");
    }

    let app = create_app(config.clone())
        .map_err(|e| anyhow::anyhow!("Invalid gateway configuration: {}", e))?;

    serve(app, &config).await
}
