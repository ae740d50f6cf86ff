//! Periscope configuration structures to map the periscope.toml configuration.

#![deny(missing_docs)]

mod anthropic;
mod loader;
mod mcp;

use std::{net::SocketAddr, path::Path};

pub use anthropic::{API_KEY_ENV, AnthropicConfig};
pub use mcp::McpConfig;
use serde::Deserialize;

/// Main configuration structure for the Periscope application.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP server configuration settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Model Context Protocol configuration settings.
    #[serde(default)]
    pub mcp: McpConfig,
    /// Anthropic upstream provider settings.
    #[serde(default)]
    pub anthropic: AnthropicConfig,
}

impl Config {
    /// Load configuration from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Config> {
        loader::load(path)
    }
}

/// HTTP server configuration settings.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// The socket address the server should listen on.
    pub listen_address: Option<SocketAddr>,
    /// Health endpoint configuration.
    #[serde(default)]
    pub health: HealthConfig,
}

/// Health endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthConfig {
    /// Whether the health endpoint is exposed.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Dedicated listen address for the health endpoint. When unset,
    /// the endpoint is served from the main router.
    pub listen: Option<SocketAddr>,
    /// The path of the health endpoint.
    #[serde(default = "default_health_path")]
    pub path: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            listen: None,
            path: default_health_path(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_health_path() -> String {
    "/health".to_string()
}
