mod input;
mod output;

use std::time::Duration;

use async_trait::async_trait;
use config::AnthropicConfig;
use reqwest::{Client, header::HeaderMap};
use secrecy::ExposeSecret;

use self::{input::AnthropicRequest, output::AnthropicResponse};
use crate::{error::LlmError, provider::Provider};

const DEFAULT_ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Client for the Anthropic Messages API with web search enabled.
pub struct AnthropicProvider {
    client: Client,
    base_url: String,
    model: String,
    max_web_searches: u32,
}

impl AnthropicProvider {
    /// Creates the provider.
    ///
    /// Fails with [`LlmError::MissingApiKey`] when neither the configuration
    /// nor the environment supplies a non-empty key, before any request is
    /// attempted.
    pub fn new(config: &AnthropicConfig) -> crate::Result<Self> {
        let api_key = config.resolved_api_key().ok_or(LlmError::MissingApiKey)?;

        let mut headers = HeaderMap::new();

        headers.insert(
            "x-api-key",
            api_key.expose_secret().parse().map_err(|e| {
                log::error!("Failed to parse API key header: {e}");
                LlmError::InternalError
            })?,
        );

        headers.insert(
            "anthropic-version",
            ANTHROPIC_VERSION.parse().map_err(|e| {
                log::error!("Failed to parse Anthropic version header: {e}");
                LlmError::InternalError
            })?,
        );

        headers.insert(
            "content-type",
            "application/json".parse().map_err(|e| {
                log::error!("Failed to parse content-type header: {e}");
                LlmError::InternalError
            })?,
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .default_headers(headers)
            .build()
            .map_err(|e| {
                log::error!("Failed to create HTTP client for Anthropic: {e}");
                LlmError::InternalError
            })?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_ANTHROPIC_API_URL.to_string());

        Ok(Self {
            client,
            base_url,
            model: config.model.clone(),
            max_web_searches: config.max_web_searches,
        })
    }
}

#[async_trait]
impl Provider for AnthropicProvider {
    async fn send_message(&self, prompt: &str, max_tokens: u32) -> crate::Result<String> {
        let url = format!("{}/messages", self.base_url);
        let request = AnthropicRequest::new(&self.model, prompt, max_tokens, self.max_web_searches);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Connection(format!("failed to send request: {e}")))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            log::error!("Anthropic API error ({status}): {error_text}");

            return Err(match status.as_u16() {
                400 => LlmError::InvalidRequest(error_text),
                401 => LlmError::AuthenticationFailed(error_text),
                403 => LlmError::InsufficientQuota(error_text),
                429 => LlmError::RateLimitExceeded(error_text),
                _ => LlmError::ApiError {
                    status: status.as_u16(),
                    message: error_text,
                },
            });
        }

        // First get the response as text to log if parsing fails
        let response_text = response
            .text()
            .await
            .map_err(|e| LlmError::Connection(format!("failed to read response body: {e}")))?;

        let response: AnthropicResponse = sonic_rs::from_str(&response_text).map_err(|e| {
            log::error!("Failed to parse Anthropic response: {e}");
            log::error!("Raw response that failed to parse: {response_text}");
            LlmError::MalformedResponse(e.to_string())
        })?;

        if let Some(usage) = response.usage {
            log::debug!(
                "Anthropic usage: {} input tokens, {} output tokens",
                usage.input_tokens,
                usage.output_tokens
            );
        }

        Ok(response.into_text())
    }
}

#[cfg(test)]
mod tests {
    use config::AnthropicConfig;
    use secrecy::SecretString;

    use super::AnthropicProvider;
    use crate::error::LlmError;

    #[test]
    fn empty_api_key_fails_at_construction() {
        let config = AnthropicConfig {
            api_key: Some(SecretString::from("")),
            ..Default::default()
        };

        let error = AnthropicProvider::new(&config).err().unwrap();

        assert!(matches!(error, LlmError::MissingApiKey));
    }

    #[test]
    fn configured_key_constructs_without_network() {
        let config = AnthropicConfig {
            api_key: Some(SecretString::from("sk-ant-test")),
            base_url: Some("http://127.0.0.1:4010/v1".to_string()),
            ..Default::default()
        };

        let provider = AnthropicProvider::new(&config).unwrap();

        assert_eq!(provider.base_url, "http://127.0.0.1:4010/v1");
        assert_eq!(provider.max_web_searches, 2);
    }

    #[test]
    fn default_base_url() {
        let config = AnthropicConfig {
            api_key: Some(SecretString::from("sk-ant-test")),
            ..Default::default()
        };

        let provider = AnthropicProvider::new(&config).unwrap();

        assert_eq!(provider.base_url, super::DEFAULT_ANTHROPIC_API_URL);
    }
}
