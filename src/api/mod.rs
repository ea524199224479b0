//! REST front end.
//!
//! Exposes the WAPI queries as plain JSON endpoints next to a small
//! tool-call endpoint, for clients that do not speak MCP.

mod dispatch;
mod error;
mod handlers;
mod routes;
mod server;
mod state;

pub use dispatch::ApiTool;
pub use error::ApiError;
pub use routes::create_api_routes;
pub use server::ApiServer;
pub use state::AppState;
