use std::path::PathBuf;

use convai_core::config::{load_config, resolve_default_api_key};
use convai_core::proxy::ProxyServer;

pub async fn run(config_path: Option<PathBuf>, port_override: Option<u16>) -> anyhow::Result<()> {
    // Load configuration
    let mut config = load_config(config_path)?;

    // Apply port override if provided
    if let Some(port) = port_override {
        config.server.port = port;
    }

    let default_api_key = resolve_default_api_key(&config);

    tracing::info!("Starting ConvAI console proxy...");
    tracing::info!("  Host: {}", config.server.host);
    tracing::info!("  Port: {}", config.server.port);
    tracing::info!("  Upstream: {}", config.upstream.base_url);

    if default_api_key.is_none() {
        tracing::warn!("No default ElevenLabs API key configured.");
        tracing::warn!("Requests without an X-Api-Key header will fail until one is set.");
    }

    // Create and start server
    let server = ProxyServer::new(
        config.server.host.clone(),
        config.server.port,
        Some(config.upstream.base_url.clone()),
        default_api_key,
    );

    tracing::info!(
        "Proxy server starting on http://{}:{}",
        config.server.host,
        config.server.port
    );
    tracing::info!("Press Ctrl+C to stop");

    // Run server (blocks until shutdown)
    server.run().await?;

    Ok(())
}
