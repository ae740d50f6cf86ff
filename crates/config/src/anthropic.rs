use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Environment variable consulted when no API key is set in the configuration file.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Anthropic upstream provider configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnthropicConfig {
    /// API key for authentication. Falls back to the `ANTHROPIC_API_KEY`
    /// environment variable when not set here.
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Custom base URL for the Anthropic API.
    #[serde(default)]
    pub base_url: Option<String>,
    /// The model answering the prompts.
    #[serde(default = "default_model")]
    pub model: String,
    /// How many web searches the model may issue per request.
    #[serde(default = "default_max_web_searches")]
    pub max_web_searches: u32,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: default_model(),
            max_web_searches: default_max_web_searches(),
        }
    }
}

impl AnthropicConfig {
    /// Resolves the API key from the configuration or the environment.
    ///
    /// Returns `None` when neither source provides a non-empty key.
    pub fn resolved_api_key(&self) -> Option<SecretString> {
        let key = match &self.api_key {
            Some(key) => Some(key.clone()),
            None => std::env::var(API_KEY_ENV).ok().map(SecretString::from),
        };

        key.filter(|key| !key.expose_secret().is_empty())
    }
}

fn default_model() -> String {
    "claude-3-5-sonnet-20241022".to_string()
}

fn default_max_web_searches() -> u32 {
    2
}
