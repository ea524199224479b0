//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    AddTool, ListBreedsTool, ListGridMembersTool, ListRecordsTool, ListZonesTool,
};
use crate::domains::infoblox::InfobloxClient;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<InfobloxClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(AddTool::create_route())
        .with_route(ListZonesTool::create_route(client.clone()))
        .with_route(ListRecordsTool::create_route(client.clone()))
        .with_route(ListGridMembersTool::create_route(client.clone()))
        .with_route(ListBreedsTool::create_route(client))
}
