//! Tool-specific error types.
//!
//! Only caller mistakes are errors here. Upstream failures are reported
//! inside the tool result with `isError` set, so the call itself succeeds.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    /// No tool is registered under this name.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// The arguments do not match the tool's input schema.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl ToolError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}
