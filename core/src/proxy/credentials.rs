//! Credential resolution for inbound requests.

use axum::http::HeaderMap;

use crate::proxy::error::ProxyError;

/// Header the browser sets when the operator stored a session-scoped key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Resolve the ElevenLabs API key for one request.
///
/// A caller-supplied `X-Api-Key` header wins over the configured default.
/// Handlers must not issue any upstream call when this returns an error.
/// The key is never validated here; the upstream is the judge of validity.
pub fn resolve_api_key(
    headers: &HeaderMap,
    default_key: Option<&str>,
) -> Result<String, ProxyError> {
    if let Some(value) = headers.get(API_KEY_HEADER) {
        if let Ok(key) = value.to_str() {
            if !key.is_empty() {
                return Ok(key.to_string());
            }
        }
    }

    match default_key {
        Some(key) if !key.is_empty() => Ok(key.to_string()),
        _ => Err(ProxyError::MissingApiKey),
    }
}
