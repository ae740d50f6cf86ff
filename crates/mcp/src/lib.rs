//! MCP server exposing a single tool that asks Claude, with web search enabled.

#![deny(missing_docs)]

mod server;
mod tool;

use std::{sync::Arc, time::Duration};

use axum::{Router, http::StatusCode, routing};
use config::McpConfig;
use llm::Provider;
use rmcp::transport::{
    StreamableHttpServerConfig, StreamableHttpService, streamable_http_server::session::never::NeverSessionManager,
};

/// Creates an axum router serving the MCP endpoint.
///
/// The provider is constructed by the caller and injected here; the server
/// holds no other state.
pub fn router(config: &McpConfig, provider: Arc<dyn Provider>) -> Router {
    log::info!("Creating MCP router for path: {}", config.path);
    let mcp_server = server::McpServer::new(provider);

    let service = StreamableHttpService::new(
        move || Ok(mcp_server.clone()),
        Arc::new(NeverSessionManager::default()),
        StreamableHttpServerConfig {
            sse_keep_alive: Some(Duration::from_secs(5)),
            stateful_mode: false,
        },
    );

    // Handler for OPTIONS requests
    async fn handle_options() -> StatusCode {
        StatusCode::OK
    }

    Router::new().route(
        &config.path,
        routing::get_service(service.clone())
            .post_service(service.clone())
            .delete_service(service)
            .options(handle_options),
    )
}
