//! Upstream client for calling the ElevenLabs API

use reqwest::{Client, Method, Response};
use serde_json::Value;
use tokio::time::Duration;

use crate::proxy::error::ProxyError;

pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io/v1";

/// Header the upstream requires the credential on.
const UPSTREAM_API_KEY_HEADER: &str = "xi-api-key";

#[derive(Clone)]
pub struct UpstreamClient {
    http_client: Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(base_url: Option<String>) -> Self {
        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(20))
            .pool_max_idle_per_host(16)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .user_agent("convai-console/0.1")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Send one request to the upstream with the resolved key attached.
    ///
    /// Path parameters arrive already substituted; JSON bodies are
    /// re-serialized verbatim. Exactly one attempt, no retries; transport
    /// failures surface as `ProxyError::Unexpected`.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        api_key: &str,
        body: Option<&Value>,
    ) -> Result<Response, ProxyError> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self
            .http_client
            .request(method, &url)
            .header(UPSTREAM_API_KEY_HEADER, api_key);

        if let Some(body) = body {
            request = request.json(body);
        }

        Ok(request.send().await?)
    }

    pub async fn get(&self, path: &str, api_key: &str) -> Result<Response, ProxyError> {
        self.send(Method::GET, path, api_key, None).await
    }
}
