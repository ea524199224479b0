use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use super::routes::create_api_routes;
use super::state::AppState;
use crate::core::config::ApiConfig;
use crate::core::transport::TransportError;
use crate::domains::infoblox::InfobloxClient;

/// Standalone REST server over the WAPI client.
pub struct ApiServer {
    config: ApiConfig,
}

impl ApiServer {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    pub fn router(&self, client: Arc<InfobloxClient>) -> Router {
        let state = AppState::new(client, self.config.manifest_path.clone());
        let app = create_api_routes(state);

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

    /// Serve until the listener fails.
    pub async fn run(self, client: Arc<InfobloxClient>) -> crate::Result<()> {
        let addr = self.address();
        let app = self.router(client);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("REST API listening on {}", addr);
        info!("  → Manifest: {}", self.config.manifest_path.display());

        axum::serve(listener, app).await?;
        Ok(())
    }
}
