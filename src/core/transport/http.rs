//! Plain JSON-RPC 2.0 over HTTP.
//!
//! Each POST carries one request and gets one JSON document back. No session
//! is kept between requests, which lets curl and simple scripts talk to the
//! server without an MCP client library.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rmcp::ServerHandler;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;

const PARSE_ERROR: i32 = -32700;
const INVALID_REQUEST: i32 = -32600;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;
const INTERNAL_ERROR: i32 = -32603;

pub struct HttpTransport {
    config: HttpConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// Exactly one of `result` and `error` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn invalid_params(err: impl ToString) -> Self {
        Self::new(INVALID_PARAMS, err.to_string())
    }
}

impl JsonRpcResponse {
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(id: Option<Value>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

impl HttpTransport {
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// JSON-RPC endpoint plus `/health` and a `/` self-description.
    pub fn router(&self, server: McpServer) -> Router {
        let app = Router::new()
            .route(&self.config.rpc_path, post(handle_rpc))
            .route("/health", get(health_check))
            .route("/", get(root_handler))
            .with_state(server);

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
            "JSON-RPC over HTTP listening on {} (POST {}, CORS {})",
            addr,
            self.config.rpc_path,
            if self.config.enable_cors { "on" } else { "off" }
        );

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))
    }
}

async fn root_handler(State(server): State<McpServer>) -> impl IntoResponse {
    Json(json!({
        "name": server.name(),
        "version": server.version(),
        "transport": "HTTP",
        "protocol": "JSON-RPC 2.0",
        "endpoints": {
            "health": "/health"
        }
    }))
}

async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Notifications have no id and get 202 with an empty body. Bodies that do
/// not decode get a JSON-RPC error envelope with a null id.
#[instrument(skip_all, fields(method))]
async fn handle_rpc(
    State(server): State<McpServer>,
    body: Result<Json<JsonRpcRequest>, JsonRejection>,
) -> Response {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Undecodable JSON-RPC body: {}", rejection.body_text());
            let error = match rejection {
                JsonRejection::JsonSyntaxError(e) => {
                    JsonRpcError::new(PARSE_ERROR, format!("Parse error: {}", e.body_text()))
                }
                other => JsonRpcError::new(
                    INVALID_REQUEST,
                    format!("Invalid Request: {}", other.body_text()),
                ),
            };
            return (StatusCode::OK, Json(JsonRpcResponse::failure(None, error))).into_response();
        }
    };
    tracing::Span::current().record("method", request.method.as_str());

    if request.method.starts_with("notifications/") {
        debug!("Acknowledging notification {}", request.method);
        return StatusCode::ACCEPTED.into_response();
    }

    let response = if request.jsonrpc != "2.0" {
        JsonRpcResponse::failure(
            request.id,
            JsonRpcError::new(INVALID_REQUEST, "Invalid Request"),
        )
    } else {
        match dispatch(&server, &request).await {
            Ok(result) => JsonRpcResponse::success(request.id, result),
            Err(error) => JsonRpcResponse::failure(request.id, error),
        }
    };
    (StatusCode::OK, Json(response)).into_response()
}

async fn dispatch(server: &McpServer, request: &JsonRpcRequest) -> Result<Value, JsonRpcError> {
    let params = request.params.as_ref();

    match request.method.as_str() {
        "initialize" => {
            info!("Client initializing");
            serde_json::to_value(server.get_info())
                .map_err(|e| JsonRpcError::new(INTERNAL_ERROR, e.to_string()))
        }
        "ping" => Ok(json!({})),
        "tools/list" => Ok(server.list_tools()),
        "tools/call" => {
            let name = required_param(params, "name")?;
            let arguments = params
                .and_then(|p| p.get("arguments"))
                .cloned()
                .unwrap_or_else(|| json!({}));
            // Upstream failures come back as a successful call with `isError` set.
            server
                .call_tool(&name, arguments)
                .await
                .map_err(JsonRpcError::invalid_params)
        }
        "resources/list" => Ok(server.list_resources().await),
        "resources/templates/list" => Ok(server.list_resource_templates().await),
        "resources/read" => {
            let uri = required_param(params, "uri")?;
            server
                .read_resource(&uri)
                .await
                .map_err(JsonRpcError::invalid_params)
        }
        "prompts/list" => Ok(server.list_prompts().await),
        "prompts/get" => {
            let name = required_param(params, "name")?;
            let arguments = params.and_then(|p| p.get("arguments")).cloned();
            server
                .get_prompt(&name, arguments)
                .await
                .map_err(JsonRpcError::invalid_params)
        }
        method => {
            warn!("Unknown method: {}", method);
            Err(JsonRpcError::new(METHOD_NOT_FOUND, "Method not found"))
        }
    }
}

fn required_param(params: Option<&Value>, field: &str) -> Result<String, JsonRpcError> {
    params
        .and_then(|p| p.get(field))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| JsonRpcError::invalid_params(format!("Missing '{}'", field)))
}
