//! Crate-level error type.
//!
//! Only start-up and serving failures surface here. Per-request failures
//! stay in their domain error types and are answered on the wire.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Missing or unusable environment settings.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The WAPI client could not be built.
    #[error("Upstream error: {0}")]
    Client(#[from] crate::domains::infoblox::ClientError),

    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
