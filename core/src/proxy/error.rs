//! Uniform error envelope shared by every proxy handler.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::{json, Value};
use thiserror::Error;

/// Failure modes a handler can surface to the caller.
///
/// Every endpoint reports failures with the same `{error, details?}` JSON
/// envelope; the variant decides the status code.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// No credential could be resolved for the request.
    #[error("ElevenLabs API key not found")]
    MissingApiKey,

    /// The upstream answered with a non-success status; its status code and
    /// parsed error body are relayed transparently.
    #[error("{message}")]
    Upstream {
        status: u16,
        message: String,
        details: Value,
    },

    /// The inbound payload failed a handler's own checks.
    #[error("{0}")]
    Validation(String),

    /// Network failures, unreadable bodies, anything else. Collapsed to a
    /// generic 500 so no internal fault detail leaks to the caller.
    #[error("An unexpected error occurred")]
    Unexpected(#[from] anyhow::Error),
}

impl ProxyError {
    /// Wrap a non-success upstream response, preserving its original status
    /// and parsed error body. An unparseable error body escalates to
    /// `Unexpected`.
    pub async fn from_upstream(response: reqwest::Response, message: &str) -> Self {
        let status = response.status().as_u16();
        match response.json::<Value>().await {
            Ok(details) => Self::Upstream {
                status,
                message: message.to_string(),
                details,
            },
            Err(e) => Self::Unexpected(e.into()),
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        Self::Unexpected(err.into())
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingApiKey => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "ElevenLabs API key not found" })),
            )
                .into_response(),
            Self::Upstream {
                status,
                message,
                details,
            } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                Json(json!({ "error": message, "details": details })),
            )
                .into_response(),
            Self::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            Self::Unexpected(err) => {
                tracing::error!("Unexpected proxy error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "An unexpected error occurred" })),
                )
                    .into_response()
            }
        }
    }
}
