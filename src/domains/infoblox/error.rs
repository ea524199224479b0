//! Upstream client error types.

use thiserror::Error;

/// Errors returned by [`InfobloxClient`](super::InfobloxClient) calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the response could not be read.
    #[error("Request to upstream failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream answered with a non-success status.
    #[error("Upstream returned {status} for {url}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body did not match the expected shape.
    #[error("Unexpected response from {url}: {reason}")]
    MalformedResponse { url: String, reason: String },
}

impl ClientError {
    /// Create a new "malformed response" error.
    pub fn malformed(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            url: url.into(),
            reason: reason.into(),
        }
    }
}
