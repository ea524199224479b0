//! Streamable HTTP transport.
//!
//! Mounts rmcp's `StreamableHttpService` on an axum router. Responses are
//! streamed as server-sent events and each client gets its own session.

use axum::{Json, Router, response::IntoResponse, routing::get};
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use super::{HttpConfig, TransportError, TransportResult};
use crate::core::McpServer;

pub struct StreamableHttpTransport {
    config: HttpConfig,
}

impl StreamableHttpTransport {
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// MCP service at the configured path plus `/health`.
    pub fn router(&self, server: McpServer) -> Router {
        // Every session gets a clone; clones share the same client.
        let service = StreamableHttpService::new(
            move || Ok(server.clone()),
            LocalSessionManager::default().into(),
            StreamableHttpServerConfig::default(),
        );

        let app = Router::new()
            .nest_service(&self.config.rpc_path, service)
            .route("/health", get(health_check));

        if self.config.enable_cors {
            app.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
        } else {
            app
        }
    }

    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = self.router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(
            "Streamable HTTP listening on {} (MCP at {}, health at /health)",
            addr, self.config.rpc_path
        );

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))
    }
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
