//! MCP Server Entry Point
//!
//! Loads configuration, initializes logging, builds the WAPI client and
//! starts the server with the configured transport.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use infoblox_mcp_server::core::{Config, McpServer, TransportService, init_logging};
use infoblox_mcp_server::domains::infoblox::InfobloxClient;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    init_logging(&config.logging);

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!("WAPI endpoint: {}", config.infoblox.base_url);

    let client = Arc::new(InfobloxClient::new(&config.infoblox)?);
    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::new(config, client);

    info!("Server initialized");

    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}
