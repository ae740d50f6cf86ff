//! Periscope server library.
//!
//! Provides a reusable serve function, used by the binary and by tests.

#![deny(missing_docs)]

mod health;

use std::{net::SocketAddr, sync::Arc};

use anyhow::anyhow;
use axum::{Router, routing::get};
use config::Config;
use llm::{AnthropicProvider, Provider};
use tokio::net::TcpListener;

/// Configuration for serving Periscope.
pub struct ServeConfig {
    /// The socket address (IP and port) the server will bind to.
    pub listen_address: SocketAddr,
    /// The deserialized Periscope TOML configuration.
    pub config: Config,
}

/// Starts and runs the Periscope server with the provided configuration.
///
/// Missing Anthropic credentials fail here, before anything is served.
pub async fn serve(ServeConfig { listen_address, config }: ServeConfig) -> anyhow::Result<()> {
    let mut app = Router::new();

    let mut mcp_exposed = false;

    if config.mcp.enabled {
        let provider = Arc::new(AnthropicProvider::new(&config.anthropic)?) as Arc<dyn Provider>;

        app = app.merge(mcp::router(&config.mcp, provider));
        mcp_exposed = true;
    }

    if config.server.health.enabled {
        if let Some(listen) = config.server.health.listen {
            tokio::spawn(health::bind_health_endpoint(listen, config.server.health.clone()));
        } else {
            app = app.route(&config.server.health.path, get(health::health));
        }
    }

    if !mcp_exposed {
        log::warn!("Server starting with the MCP endpoint disabled. Enable it in the configuration to expose the tool.");
    }

    let listener = TcpListener::bind(listen_address)
        .await
        .map_err(|e| anyhow!("Failed to bind to {listen_address}: {e}"))?;

    if mcp_exposed {
        log::info!("MCP endpoint available at: http://{listen_address}{}", config.mcp.path);
    }

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow!("Failed to start HTTP server: {e}"))?;

    Ok(())
}
