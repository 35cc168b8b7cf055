//! Chat/TTS preview handler
//!
//! The realtime conversation channel is not available in this deployment,
//! so the agent reply is simulated: the user's message is echoed through a
//! fixed template and synthesized via the streaming TTS endpoint. This is
//! an intentional stand-in, not real dialogue.

use axum::{
    body::Bytes,
    extract::State,
    http::HeaderMap,
    response::Response,
};
use reqwest::Method;
use serde_json::json;

use crate::proxy::credentials::resolve_api_key;
use crate::proxy::error::ProxyError;
use crate::proxy::handlers::{parse_json_body, relay_audio};
use crate::proxy::server::AppState;

pub const TTS_MODEL_ID: &str = "eleven_multilingual_v2";

/// The placeholder "agent reply" echoed back for the preview.
fn simulated_reply(message: &str) -> String {
    format!("You said: \"{}\"", message)
}

/// Handle POST /chat
pub async fn chat_preview(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let api_key = resolve_api_key(&headers, state.default_api_key.as_deref())?;
    let body = parse_json_body(&body)?;

    let message = body.get("message").and_then(|v| v.as_str()).unwrap_or("");
    let voice_id = body.get("voiceId").and_then(|v| v.as_str()).unwrap_or("");

    if message.is_empty() || voice_id.is_empty() {
        return Err(ProxyError::Validation(
            "Missing message or voiceId".to_string(),
        ));
    }

    tracing::info!("Chat preview for voice {}", voice_id);

    let tts_body = json!({
        "text": simulated_reply(message),
        "model_id": TTS_MODEL_ID,
    });

    let response = state
        .upstream
        .send(
            Method::POST,
            &format!("/text-to-speech/{}/stream", voice_id),
            &api_key,
            Some(&tts_body),
        )
        .await?;

    if !response.status().is_success() {
        return Err(
            ProxyError::from_upstream(response, "Failed to stream audio from ElevenLabs").await,
        );
    }

    relay_audio(response, None)
}
