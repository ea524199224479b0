//! Starts the MCP server on whichever transport `MCP_TRANSPORT` selected.

use tracing::info;

use super::{TransportConfig, TransportResult};
use crate::core::McpServer;

#[cfg(feature = "stdio")]
use super::stdio::StdioTransport;

#[cfg(feature = "http")]
use super::http::HttpTransport;

#[cfg(feature = "streamable-http")]
use super::streamable::StreamableHttpTransport;

pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Serve until the transport shuts down or fails.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        info!("Starting transport: {}", self.config.description());

        match self.config {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => StdioTransport::run(server).await,
            #[cfg(feature = "http")]
            TransportConfig::Http(cfg) => HttpTransport::new(cfg).run(server).await,
            #[cfg(feature = "streamable-http")]
            TransportConfig::StreamableHttp(cfg) => {
                StreamableHttpTransport::new(cfg).run(server).await
            }
        }
    }
}
