//! Infoblox MCP Server Library
//!
//! Read-only access to an Infoblox grid through its WAPI, exposed two ways:
//!
//! - **core** + **domains**: an MCP server (tools, a resource template and a
//!   prompt) served over STDIO, JSON-RPC HTTP or streamable HTTP
//! - **api**: a REST front end with the same queries and a tool-call endpoint
//!
//! Both front ends share one [`domains::infoblox::InfobloxClient`].
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use infoblox_mcp_server::core::{Config, McpServer, TransportService};
//! use infoblox_mcp_server::domains::infoblox::InfobloxClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = Arc::new(InfobloxClient::new(&config.infoblox)?);
//!     let transport = TransportService::new(config.transport.clone());
//!     transport.run(McpServer::new(config, client)).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
