//! Request handlers, one per proxied resource.

pub mod agents;
pub mod batch_calls;
pub mod chat;
pub mod conversations;

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde_json::Value;

use crate::proxy::error::ProxyError;

/// Parse an inbound body as an opaque JSON value.
///
/// The proxy does no schema validation; whatever structure the caller sent
/// is forwarded unchanged. Syntactically invalid JSON is an unexpected
/// error, matching the generic 500 contract.
pub(crate) fn parse_json_body(body: &[u8]) -> Result<Value, ProxyError> {
    serde_json::from_slice(body).map_err(|e| ProxyError::Unexpected(e.into()))
}

/// Relay an upstream JSON response verbatim with the given success status,
/// or wrap a non-success response in the error envelope.
pub(crate) async fn relay_json(
    response: reqwest::Response,
    status: StatusCode,
    error_message: &str,
) -> Result<Response, ProxyError> {
    if !response.status().is_success() {
        return Err(ProxyError::from_upstream(response, error_message).await);
    }

    let body: Value = response.json().await?;
    Ok((status, Json(body)).into_response())
}

/// Relay an upstream byte stream without buffering the whole payload.
///
/// Chunks are forwarded as they arrive; once headers are committed a
/// mid-stream upstream failure can only truncate the output.
pub(crate) fn relay_audio(
    response: reqwest::Response,
    content_disposition: Option<String>,
) -> Result<Response, ProxyError> {
    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "audio/mpeg");

    if let Some(disposition) = content_disposition {
        builder = builder.header(header::CONTENT_DISPOSITION, disposition);
    }

    builder
        .body(Body::from_stream(response.bytes_stream()))
        .map_err(|e| ProxyError::Unexpected(e.into()))
}
