//! Batch calling handlers - passthroughs to /convai/batch-calling
//!
//! A batch call is a bulk outbound-calling job created from a CSV of
//! recipients and a target agent. Status transitions are upstream-owned;
//! the console polls by re-fetching the list.

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Response,
};
use reqwest::Method;

use crate::proxy::credentials::resolve_api_key;
use crate::proxy::error::ProxyError;
use crate::proxy::handlers::{parse_json_body, relay_json};
use crate::proxy::server::AppState;

/// Handle GET /batch-calls
pub async fn list_batch_calls(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ProxyError> {
    let api_key = resolve_api_key(&headers, state.default_api_key.as_deref())?;

    let response = state.upstream.get("/convai/batch-calling", &api_key).await?;
    relay_json(response, StatusCode::OK, "Failed to fetch batch calls").await
}

/// Handle POST /batch-calls
pub async fn create_batch_call(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let api_key = resolve_api_key(&headers, state.default_api_key.as_deref())?;
    let body = parse_json_body(&body)?;

    let response = state
        .upstream
        .send(
            Method::POST,
            "/convai/batch-calling/create-from-csv",
            &api_key,
            Some(&body),
        )
        .await?;
    relay_json(response, StatusCode::CREATED, "Failed to create batch call").await
}
