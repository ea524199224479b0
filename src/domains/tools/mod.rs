//! Tools domain module.
//!
//! Tools are executable functions that MCP clients call to query the
//! Infoblox grid (and a couple of utilities).
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - Dynamic ToolRouter builder for the rmcp transports
//! - `registry.rs` - Central tool registry and HTTP dispatch
//! - `handlers.rs` - Envelopes for calling tools over plain HTTP
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/`
//! 2. Define params, `execute()`, `http_handler()` and `create_route()`
//! 3. Export in `definitions/mod.rs`
//! 4. Add the route in `router.rs` and the dispatch arm in `registry.rs`

pub mod definitions;
mod error;
mod handlers;
mod registry;
pub mod router;

pub use error::ToolError;
pub use handlers::{ToolInput, ToolOutput};
pub use registry::ToolRegistry;
pub use router::build_tool_router;
