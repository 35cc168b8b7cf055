//! Proxy server - axum HTTP server and route table

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::proxy::handlers;
use crate::proxy::upstream::UpstreamClient;

/// Application state shared across handlers.
///
/// Read-only after startup; handlers keep nothing between requests.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,
    pub default_api_key: Option<String>,
}

/// Build the route table. Separate from [`ProxyServer`] so tests can drive
/// the router directly.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/healthz", get(health_check_handler))
        .route("/health", get(health_check_handler))
        // Agents
        .route(
            "/agents",
            get(handlers::agents::list_agents).post(handlers::agents::create_agent),
        )
        .route(
            "/agents/:agent_id",
            get(handlers::agents::get_agent)
                .put(handlers::agents::update_agent)
                .delete(handlers::agents::delete_agent),
        )
        // Batch calling
        .route(
            "/batch-calls",
            get(handlers::batch_calls::list_batch_calls)
                .post(handlers::batch_calls::create_batch_call),
        )
        // Conversations
        .route(
            "/conversations",
            get(handlers::conversations::list_conversations),
        )
        .route(
            "/conversations/:conversation_id/audio",
            get(handlers::conversations::download_audio),
        )
        // Chat/TTS preview
        .route("/chat", post(handlers::chat::chat_preview))
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024)) // 10MB
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Proxy server instance
pub struct ProxyServer {
    host: String,
    port: u16,
    state: AppState,
}

impl ProxyServer {
    pub fn new(
        host: String,
        port: u16,
        upstream_base_url: Option<String>,
        default_api_key: Option<String>,
    ) -> Self {
        let state = AppState {
            upstream: Arc::new(UpstreamClient::new(upstream_base_url)),
            default_api_key,
        };

        Self { host, port, state }
    }

    /// Run the proxy server (blocking)
    pub async fn run(self) -> anyhow::Result<()> {
        let app = router(self.state);

        let addr = format!("{}:{}", self.host, self.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        tracing::info!("Proxy server listening on {}", addr);

        // Handle graceful shutdown
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Proxy server stopped");
        Ok(())
    }
}

/// Health check handler
async fn health_check_handler() -> Response {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"}))).into_response()
}

/// Shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
