//! REST API entry point.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use infoblox_mcp_server::api::ApiServer;
use infoblox_mcp_server::core::{Config, init_logging};
use infoblox_mcp_server::domains::infoblox::InfobloxClient;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    init_logging(&config.logging);

    info!("Starting REST API v{}", config.server.version);
    info!("WAPI endpoint: {}", config.infoblox.base_url);

    let client = Arc::new(InfobloxClient::new(&config.infoblox)?);
    ApiServer::new(config.api).run(client).await?;

    Ok(())
}
