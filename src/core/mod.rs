//! Process-level plumbing shared by both binaries.

pub mod config;
pub mod error;
pub mod logging;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
