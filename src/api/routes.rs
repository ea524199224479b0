use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/zones", get(handlers::get_zones))
        .route("/records", get(handlers::get_records))
        .route("/grid-members", get(handlers::get_grid_members))
        .route("/mcp/", get(handlers::health_check))
        .route("/mcp/manifest", get(handlers::get_manifest))
        .route("/mcp/call", post(handlers::call_tool))
        .with_state(state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
