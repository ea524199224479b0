//! Addition tool definition.
//!
//! A trivial tool clients can call to check the server is alive.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::common::{error_result, parse_arguments, result_to_json, structured_result};
use crate::domains::tools::ToolError;

/// Parameters for the add tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddParams {
    /// First operand.
    pub a: i64,
    /// Second operand.
    pub b: i64,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct AddResult {
    pub result: i64,
}

/// Add tool - returns the sum of two integers.
pub struct AddTool;

impl AddTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Add two numbers";

    /// Execute the tool logic.
    pub fn execute(params: &AddParams) -> CallToolResult {
        info!("Add tool called: {} + {}", params.a, params.b);

        match params.a.checked_add(params.b) {
            Some(result) => structured_result(&AddResult { result }),
            None => {
                warn!("Integer overflow adding {} and {}", params.a, params.b);
                error_result(&format!(
                    "Integer overflow adding {} and {}",
                    params.a, params.b
                ))
            }
        }
    }

    /// HTTP handler for this tool (for the JSON-RPC HTTP transport).
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let params: AddParams = parse_arguments(arguments)?;
        Ok(result_to_json(Self::execute(&params)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<AddParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for rmcp transports.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: AddParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}
