//! The MCP handler shared by every transport.
//!
//! Tools come from `build_tool_router`, resources and prompts from their
//! domain services; this file only wires them to rmcp.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::{
    infoblox::InfobloxClient,
    prompts::{PromptError, PromptService},
    resources::{ResourceError, ResourceService},
    tools::{ToolError, ToolRegistry, build_tool_router},
};

/// Infoblox MCP handler.
///
/// Cheap to clone; every clone shares the same upstream client and services.
#[derive(Clone)]
pub struct McpServer {
    config: Arc<Config>,

    resource_service: Arc<ResourceService>,

    prompt_service: Arc<PromptService>,

    /// Name-based dispatch for the JSON-RPC transport.
    tool_registry: ToolRegistry,

    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server around an already-built upstream client.
    pub fn new(config: Config, client: Arc<InfobloxClient>) -> Self {
        Self {
            config: Arc::new(config),
            tool_registry: ToolRegistry::new(client.clone()),
            tool_router: build_tool_router::<Self>(client),
            resource_service: Arc::new(ResourceService::new()),
            prompt_service: Arc::new(PromptService::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    // Entry points for the JSON-RPC transport. Each returns the same rmcp
    // model value the ServerHandler method would, already serialized.

    pub fn list_tools(&self) -> Value {
        json!({ "tools": self.tool_router.list_all() })
    }

    pub async fn call_tool(&self, name: &str, arguments: Value) -> Result<Value, ToolError> {
        self.tool_registry.call_tool(name, arguments).await
    }

    pub async fn list_resources(&self) -> Value {
        json!({ "resources": self.resource_service.list_resources().await })
    }

    pub async fn list_resource_templates(&self) -> Value {
        json!({ "resourceTemplates": self.resource_service.list_resource_templates().await })
    }

    pub async fn read_resource(&self, uri: &str) -> Result<Value, ResourceError> {
        let result = self.resource_service.read_resource(uri).await?;
        Ok(json!(result))
    }

    pub async fn list_prompts(&self) -> Value {
        json!({ "prompts": self.prompt_service.list_prompts().await })
    }

    /// Non-string argument values are ignored.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<Value>,
    ) -> Result<Value, PromptError> {
        let args = arguments.and_then(|v| v.as_object().map(string_arguments));
        let result = self.prompt_service.get_prompt(name, args).await?;
        Ok(json!(result))
    }
}

fn string_arguments(map: &serde_json::Map<String, Value>) -> HashMap<String, String> {
    map.iter()
        .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
        .collect()
}

fn resource_error_to_mcp(err: ResourceError) -> McpError {
    match err {
        ResourceError::NotFound(_) => McpError::resource_not_found(err.to_string(), None),
        ResourceError::InvalidUri(_) => McpError::invalid_params(err.to_string(), None),
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            instructions: Some(
                "Read-only access to an Infoblox grid through the WAPI. Use list_zones to \
                 discover authoritative zones, list_records with a zone FQDN for its A records, \
                 and list_grid_members for the appliances in the grid."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        info!("Listing resource templates");
        let templates = self.resource_service.list_resource_templates().await;
        Ok(ListResourceTemplatesResult {
            resource_templates: templates,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(resource_error_to_mcp)
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        let prompts = self.prompt_service.list_prompts().await;
        Ok(ListPromptsResult {
            prompts,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        let arguments = request.arguments.as_ref().map(string_arguments);
        self.prompt_service
            .get_prompt(&request.name, arguments)
            .await
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }
}
