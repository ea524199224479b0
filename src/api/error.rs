use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::domains::infoblox::ClientError;

/// Failures surfaced by the REST API.
///
/// Upstream messages are passed through unredacted.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Upstream(#[from] ClientError),

    #[error("Manifest unavailable at {path}: {source}")]
    Manifest {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) | Self::Manifest { .. } | Self::Encode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        let message = match err {
            JsonRejection::JsonDataError(e) => format!("Invalid request body: {}", e.body_text()),
            JsonRejection::JsonSyntaxError(e) => format!("Malformed JSON: {}", e.body_text()),
            JsonRejection::MissingJsonContentType(_) => {
                "Expected Content-Type: application/json".to_string()
            }
            other => format!("Failed to read request body: {}", other.body_text()),
        };
        Self::BadRequest(message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_client_error() {
            warn!(%status, "{}", message);
        } else {
            error!(%status, "{}", message);
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}
