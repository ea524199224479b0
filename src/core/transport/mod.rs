//! MCP transports, one cargo feature each: `stdio`, `http` (plain JSON-RPC
//! over POST) and `streamable-http` (rmcp's SSE service).

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "streamable-http")]
pub mod streamable;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(any(feature = "http", feature = "streamable-http"))]
pub use config::HttpConfig;
