//! Grid member listing tool.

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

use crate::domains::infoblox::{ClientError, GridMember, InfobloxClient};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{
    error_result, parse_arguments, result_to_json, structured_result,
};

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListGridMembersParams {}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct GridMemberListing {
    pub members: Vec<GridMemberSummary>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct GridMemberSummary {
    pub host_name: String,
    #[serde(rename = "ref")]
    pub reference: String,
}

impl From<GridMember> for GridMemberSummary {
    fn from(member: GridMember) -> Self {
        Self {
            host_name: member.host_name,
            reference: member.reference,
        }
    }
}

/// List the appliances that belong to the grid.
pub struct ListGridMembersTool;

impl ListGridMembersTool {
    pub const NAME: &'static str = "list_grid_members";

    pub const DESCRIPTION: &'static str = "List all Infoblox Grid members";

    pub async fn list(client: &InfobloxClient) -> Result<GridMemberListing, ClientError> {
        let members: Vec<GridMemberSummary> = client
            .get_grid_members()
            .await?
            .into_iter()
            .map(GridMemberSummary::from)
            .collect();
        let total = members.len();
        Ok(GridMemberListing { members, total })
    }

    #[instrument(skip_all)]
    pub async fn execute(client: &InfobloxClient) -> CallToolResult {
        info!("List grid members tool called");
        match Self::list(client).await {
            Ok(listing) => {
                info!("Found {} grid member(s)", listing.total);
                structured_result(&listing)
            }
            Err(e) => {
                error!("Grid member listing failed: {}", e);
                error_result(&e.to_string())
            }
        }
    }

    pub async fn http_handler(
        arguments: serde_json::Value,
        client: &InfobloxClient,
    ) -> Result<serde_json::Value, ToolError> {
        let _params: ListGridMembersParams = parse_arguments(arguments)?;
        Ok(result_to_json(Self::execute(client).await))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListGridMembersParams>(),
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
                let _params: ListGridMembersParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&client).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::ddi::test_support::{client_for, mount_json};
    use serde_json::json;
    use wiremock::MockServer;

    #[tokio::test]
    async fn test_list_grid_members_drops_extra_fields() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "member",
            json!([
                {"_ref": "member/gm", "host_name": "gm.lab.local", "ipv4_address": "10.0.0.2"},
                {"_ref": "member/m1", "host_name": "m1.lab.local", "ipv4_address": "10.0.0.3", "status": "ONLINE"}
            ]),
        )
        .await;

        let listing = ListGridMembersTool::list(&client_for(&server)).await.unwrap();
        assert_eq!(listing.total, 2);
        assert_eq!(
            serde_json::to_value(&listing.members[0]).unwrap(),
            json!({"host_name": "gm.lab.local", "ref": "member/gm"})
        );
    }

    #[tokio::test]
    async fn test_list_grid_members_empty() {
        let server = MockServer::start().await;
        mount_json(&server, "member", json!([])).await;

        let result = ListGridMembersTool::execute(&client_for(&server)).await;
        assert_eq!(
            result.structured_content,
            Some(json!({"members": [], "total": 0}))
        );
    }
}
