//! Agent resource handlers - passthroughs to /convai/agents

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use reqwest::Method;
use serde_json::json;

use crate::proxy::credentials::resolve_api_key;
use crate::proxy::error::ProxyError;
use crate::proxy::handlers::{parse_json_body, relay_json};
use crate::proxy::server::AppState;

/// Handle GET /agents
pub async fn list_agents(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ProxyError> {
    let api_key = resolve_api_key(&headers, state.default_api_key.as_deref())?;

    let response = state.upstream.get("/convai/agents", &api_key).await?;
    relay_json(
        response,
        StatusCode::OK,
        "Failed to fetch agents from ElevenLabs",
    )
    .await
}

/// Handle POST /agents
pub async fn create_agent(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let api_key = resolve_api_key(&headers, state.default_api_key.as_deref())?;
    let body = parse_json_body(&body)?;

    let response = state
        .upstream
        .send(Method::POST, "/convai/agents", &api_key, Some(&body))
        .await?;
    relay_json(
        response,
        StatusCode::CREATED,
        "Failed to create agent in ElevenLabs",
    )
    .await
}

/// Handle GET /agents/{agent_id}
pub async fn get_agent(
    State(state): State<AppState>,
    Path(agent_id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ProxyError> {
    let api_key = resolve_api_key(&headers, state.default_api_key.as_deref())?;

    let response = state
        .upstream
        .get(&format!("/convai/agents/{}", agent_id), &api_key)
        .await?;
    relay_json(response, StatusCode::OK, "Failed to fetch agent").await
}

/// Handle PUT /agents/{agent_id}
///
/// The upstream body is discarded on success; callers get a confirmation
/// message instead.
pub async fn update_agent(
    State(state): State<AppState>,
    Path(agent_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let api_key = resolve_api_key(&headers, state.default_api_key.as_deref())?;
    let body = parse_json_body(&body)?;

    let response = state
        .upstream
        .send(
            Method::PUT,
            &format!("/convai/agents/{}", agent_id),
            &api_key,
            Some(&body),
        )
        .await?;

    if !response.status().is_success() {
        return Err(ProxyError::from_upstream(response, "Failed to update agent").await);
    }

    Ok(Json(json!({ "message": "Agent updated successfully" })).into_response())
}

/// Handle DELETE /agents/{agent_id}
pub async fn delete_agent(
    State(state): State<AppState>,
    Path(agent_id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ProxyError> {
    let api_key = resolve_api_key(&headers, state.default_api_key.as_deref())?;

    let response = state
        .upstream
        .send(
            Method::DELETE,
            &format!("/convai/agents/{}", agent_id),
            &api_key,
            None,
        )
        .await?;

    if !response.status().is_success() {
        return Err(ProxyError::from_upstream(response, "Failed to delete agent").await);
    }

    Ok((
        StatusCode::NO_CONTENT,
        Json(json!({ "message": "Agent deleted successfully" })),
    )
        .into_response())
}
