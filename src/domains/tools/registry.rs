//! Tool Registry - central registration and dispatch for all tools.
//!
//! Used by the JSON-RPC HTTP transport, which does not go through the
//! rmcp router.

use std::sync::Arc;
use tracing::warn;

use rmcp::model::Tool;

use super::ToolError;
use super::definitions::{
    AddTool, ListBreedsTool, ListGridMembersTool, ListRecordsTool, ListZonesTool,
};
use crate::domains::infoblox::InfobloxClient;

/// Tool registry - manages all available tools.
#[derive(Clone)]
pub struct ToolRegistry {
    client: Arc<InfobloxClient>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(client: Arc<InfobloxClient>) -> Self {
        Self { client }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            AddTool::NAME,
            ListZonesTool::NAME,
            ListRecordsTool::NAME,
            ListGridMembersTool::NAME,
            ListBreedsTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// Both the HTTP transport and the rmcp router describe tools from the
    /// same `to_tool()` functions.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            AddTool::to_tool(),
            ListZonesTool::to_tool(),
            ListRecordsTool::to_tool(),
            ListGridMembersTool::to_tool(),
            ListBreedsTool::to_tool(),
        ]
    }

    /// Dispatch a tool call to the matching handler.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let client = self.client.as_ref();
        match name {
            AddTool::NAME => AddTool::http_handler(arguments),
            ListZonesTool::NAME => ListZonesTool::http_handler(arguments, client).await,
            ListRecordsTool::NAME => ListRecordsTool::http_handler(arguments, client).await,
            ListGridMembersTool::NAME => {
                ListGridMembersTool::http_handler(arguments, client).await
            }
            ListBreedsTool::NAME => ListBreedsTool::http_handler(arguments, client).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
