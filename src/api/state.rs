use std::path::PathBuf;
use std::sync::Arc;

use crate::domains::infoblox::InfobloxClient;

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<InfobloxClient>,
    /// Capability document served by `GET /mcp/manifest`.
    pub manifest_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(client: Arc<InfobloxClient>, manifest_path: impl Into<PathBuf>) -> Self {
        Self {
            client,
            manifest_path: Arc::new(manifest_path.into()),
        }
    }
}
