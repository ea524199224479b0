//! Dog breed listing tool.
//!
//! Reads the public breed catalogue, which needs no credentials. Useful
//! for checking outbound connectivity independently of the WAPI.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

use super::common::{error_result, parse_arguments, result_to_json, structured_result};
use crate::domains::infoblox::{ClientError, InfobloxClient};
use crate::domains::tools::ToolError;

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListBreedsParams {}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct BreedListing {
    /// Breed names in catalogue order.
    pub breeds: Vec<String>,
    pub total: usize,
}

pub struct ListBreedsTool;

impl ListBreedsTool {
    pub const NAME: &'static str = "list_breeds";

    pub const DESCRIPTION: &'static str = "List dog breeds from the public Dog API";

    pub async fn list(client: &InfobloxClient) -> Result<BreedListing, ClientError> {
        let breeds: Vec<String> = client
            .get_breeds()
            .await?
            .into_iter()
            .map(|breed| breed.attributes.name)
            .collect();
        let total = breeds.len();
        Ok(BreedListing { breeds, total })
    }

    pub async fn execute(client: &InfobloxClient) -> CallToolResult {
        info!("List breeds tool called");
        match Self::list(client).await {
            Ok(listing) => structured_result(&listing),
            Err(e) => {
                error!("Breed listing failed: {}", e);
                error_result(&e.to_string())
            }
        }
    }

    pub async fn http_handler(
        arguments: serde_json::Value,
        client: &InfobloxClient,
    ) -> Result<serde_json::Value, ToolError> {
        let _params: ListBreedsParams = parse_arguments(arguments)?;
        Ok(result_to_json(Self::execute(client).await))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListBreedsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    pub fn create_route<S>(client: Arc<InfobloxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move {
                let _params: ListBreedsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&client).await)
            }
            .boxed()
        })
    }
}
