//! Conversation handlers - list and audio download

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::Response,
};

use crate::proxy::credentials::resolve_api_key;
use crate::proxy::error::ProxyError;
use crate::proxy::handlers::{relay_audio, relay_json};
use crate::proxy::server::AppState;

/// Handle GET /conversations
pub async fn list_conversations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ProxyError> {
    let api_key = resolve_api_key(&headers, state.default_api_key.as_deref())?;

    let response = state.upstream.get("/convai/conversations", &api_key).await?;
    relay_json(response, StatusCode::OK, "Failed to fetch conversations").await
}

/// Handle GET /conversations/{conversation_id}/audio
///
/// Streams the recording straight through, chunk by chunk, with a download
/// filename derived from the conversation id.
pub async fn download_audio(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ProxyError> {
    let api_key = resolve_api_key(&headers, state.default_api_key.as_deref())?;

    let response = state
        .upstream
        .get(
            &format!("/convai/conversations/{}/audio", conversation_id),
            &api_key,
        )
        .await?;

    if !response.status().is_success() {
        return Err(
            ProxyError::from_upstream(response, "Failed to fetch audio from ElevenLabs").await,
        );
    }

    let disposition = format!("attachment; filename=\"{}.mp3\"", conversation_id);
    relay_audio(response, Some(disposition))
}
