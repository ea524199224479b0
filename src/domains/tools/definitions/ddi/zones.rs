//! Zone listing tool.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::domains::infoblox::{ClientError, InfobloxClient, Zone};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{
    error_result, parse_arguments, result_to_json, structured_result,
};

/// The zone listing takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListZonesParams {}

/// Structured output for the zone listing.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ZoneListing {
    pub zones: Vec<ZoneSummary>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ZoneSummary {
    pub fqdn: String,
    pub view: String,
    #[serde(rename = "ref")]
    pub reference: String,
}

impl From<Zone> for ZoneSummary {
    fn from(zone: Zone) -> Self {
        Self {
            fqdn: zone.fqdn,
            view: zone.view,
            reference: zone.reference,
        }
    }
}

/// List all authoritative DNS zones.
pub struct ListZonesTool;

impl ListZonesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_zones";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List all DNS zones";

    /// Fetch zones and project them to the tool output shape.
    pub async fn list(client: &InfobloxClient) -> Result<ZoneListing, ClientError> {
        let zones: Vec<ZoneSummary> = client
            .get_zones()
            .await?
            .into_iter()
            .map(ZoneSummary::from)
            .collect();
        let total = zones.len();
        Ok(ZoneListing { zones, total })
    }

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub async fn execute(client: &InfobloxClient) -> CallToolResult {
        info!("List zones tool called");
        match Self::list(client).await {
            Ok(listing) => {
                info!("Found {} zone(s)", listing.total);
                structured_result(&listing)
            }
            Err(e) => {
                error!("Zone listing failed: {}", e);
                error_result(&e.to_string())
            }
        }
    }

    /// HTTP handler for this tool (for the JSON-RPC HTTP transport).
    pub async fn http_handler(
        arguments: serde_json::Value,
        client: &InfobloxClient,
    ) -> Result<serde_json::Value, ToolError> {
        let _params: ListZonesParams = parse_arguments(arguments)?;
        Ok(result_to_json(Self::execute(client).await))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListZonesParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for rmcp transports.
    pub fn create_route<S>(client: Arc<InfobloxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move {
                let _params: ListZonesParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&client).await)
            }
            .boxed()
        })
    }
}
