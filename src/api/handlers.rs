use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::header,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{info, instrument};

use super::dispatch::ApiTool;
use super::error::ApiError;
use super::state::AppState;
use crate::domains::infoblox::{DnsRecord, GridMember, Zone};
use crate::domains::tools::{ToolInput, ToolOutput};

#[derive(Debug, Deserialize)]
pub struct RecordsQuery {
    pub zone: Option<String>,
}

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

pub async fn get_zones(State(state): State<AppState>) -> Result<Json<Vec<Zone>>, ApiError> {
    Ok(Json(state.client.get_zones().await?))
}

pub async fn get_records(
    State(state): State<AppState>,
    Query(query): Query<RecordsQuery>,
) -> Result<Json<Vec<DnsRecord>>, ApiError> {
    let zone = query
        .zone
        .ok_or_else(|| ApiError::bad_request("Missing required query parameter 'zone'"))?;
    Ok(Json(state.client.get_records(&zone).await?))
}

pub async fn get_grid_members(
    State(state): State<AppState>,
) -> Result<Json<Vec<GridMember>>, ApiError> {
    Ok(Json(state.client.get_grid_members().await?))
}

/// Serve the manifest file byte for byte.
pub async fn get_manifest(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let path = state.manifest_path.as_path();
    let body = tokio::fs::read(path).await.map_err(|source| ApiError::Manifest {
        path: path.display().to_string(),
        source,
    })?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}

#[instrument(skip_all)]
pub async fn call_tool(
    State(state): State<AppState>,
    body: Result<Json<ToolInput>, JsonRejection>,
) -> Result<Json<ToolOutput>, ApiError> {
    let Json(input) = body?;
    info!("Tool call: {}", input.tool);
    let tool = ApiTool::parse(&input)?;
    let data = tool.run(&state.client).await?;
    Ok(Json(ToolOutput::success(data)))
}
