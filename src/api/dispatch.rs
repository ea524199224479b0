//! Tool dispatch behind `POST /mcp/call`.
//!
//! Only the three WAPI queries are reachable here; the MCP server has the
//! full tool set.

use serde_json::Value;

use super::error::ApiError;
use crate::domains::infoblox::InfobloxClient;
use crate::domains::tools::ToolInput;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiTool {
    ListZones,
    ListRecords { zone: String },
    ListGridMembers,
}

impl ApiTool {
    /// Resolve a call by exact tool name and validate its arguments.
    pub fn parse(input: &ToolInput) -> Result<Self, ApiError> {
        match input.tool.as_str() {
            "list_zones" => Ok(Self::ListZones),
            "list_grid_members" => Ok(Self::ListGridMembers),
            "list_records" => {
                let zone = input
                    .arguments
                    .get("zone")
                    .and_then(Value::as_str)
                    .ok_or_else(|| {
                        ApiError::bad_request("Missing required argument 'zone' for list_records")
                    })?;
                Ok(Self::ListRecords {
                    zone: zone.to_string(),
                })
            }
            other => Err(ApiError::bad_request(format!("Unknown tool: {}", other))),
        }
    }

    /// Run the query and return the records as JSON.
    pub async fn run(self, client: &InfobloxClient) -> Result<Value, ApiError> {
        let data = match self {
            Self::ListZones => serde_json::to_value(client.get_zones().await?)?,
            Self::ListRecords { zone } => serde_json::to_value(client.get_records(&zone).await?)?,
            Self::ListGridMembers => serde_json::to_value(client.get_grid_members().await?)?,
        };
        Ok(data)
    }
}
