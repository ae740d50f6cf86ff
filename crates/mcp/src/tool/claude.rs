use std::{borrow::Cow, sync::Arc};

use llm::Provider;
use rmcp::model::{CallToolResult, Content, ToolAnnotations};
use schemars::JsonSchema;

use super::Tool;

/// Default and upper bound for the `maxTokens` argument.
pub(crate) const MAX_TOKENS: u32 = 16384;

/// Arguments accepted by the `anthropic_claude` tool.
#[derive(Debug, serde::Deserialize, JsonSchema)]
pub(crate) struct Request {
    /// The prompt or question to send to Claude.
    pub prompt: String,

    /// Maximum tokens to generate (default: 16384, max: 16384).
    #[serde(default = "default_max_tokens", rename = "maxTokens")]
    #[schemars(range(min = 1, max = 16384))]
    pub max_tokens: u32,
}

fn default_max_tokens() -> u32 {
    MAX_TOKENS
}

/// The single tool this server exposes: ask Claude, with web search enabled.
pub(crate) struct ClaudeTool {
    provider: Arc<dyn Provider>,
}

impl ClaudeTool {
    pub(crate) fn new(provider: Arc<dyn Provider>) -> Self {
        Self { provider }
    }
}

impl Tool for ClaudeTool {
    type Parameters = Request;

    fn name() -> &'static str {
        "anthropic_claude"
    }

    fn description(&self) -> Cow<'_, str> {
        let description = indoc::indoc! {r#"
            Sends a prompt to Claude (Anthropic's AI model) with web search capabilities.
            Claude can search the web for current information and provide comprehensive,
            up-to-date responses. Use this for any question that might benefit from
            real-time information or when you need Claude's reasoning capabilities
            combined with web search.
        "#};

        Cow::Borrowed(description)
    }

    fn annotations(&self) -> ToolAnnotations {
        ToolAnnotations::new()
            .read_only(true)
            .destructive(false)
            .open_world(true)
    }

    async fn call(&self, Request { prompt, max_tokens }: Self::Parameters) -> anyhow::Result<CallToolResult> {
        // The schema range is advisory for clients; enforce it here before
        // anything goes upstream.
        let max_tokens = max_tokens.clamp(1, MAX_TOKENS);

        let text = self.provider.send_message(&prompt, max_tokens).await?;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use async_trait::async_trait;
    use llm::{LlmError, Provider};
    use serde_json::json;

    use super::{ClaudeTool, MAX_TOKENS};
    use crate::tool::RmcpTool;

    #[derive(Default)]
    struct StubProvider {
        calls: AtomicUsize,
        last_max_tokens: Mutex<Option<u32>>,
        fail: bool,
    }

    impl StubProvider {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl Provider for StubProvider {
        async fn send_message(&self, _prompt: &str, max_tokens: u32) -> llm::Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_max_tokens.lock().unwrap() = Some(max_tokens);

            if self.fail {
                Err(LlmError::Connection("failed to send request: connection refused".to_string()))
            } else {
                Ok("stub response".to_string())
            }
        }
    }

    fn tool_with(provider: Arc<StubProvider>) -> ClaudeTool {
        ClaudeTool::new(provider)
    }

    fn arguments(value: serde_json::Value) -> Option<rmcp::model::JsonObject> {
        Some(value.as_object().unwrap().clone())
    }

    fn text_of(result: &rmcp::model::CallToolResult) -> String {
        result.content[0].raw.as_text().unwrap().text.clone()
    }

    #[tokio::test]
    async fn valid_prompt_returns_success() {
        let provider = Arc::new(StubProvider::default());
        let tool = tool_with(provider.clone());

        let result = tool.call(arguments(json!({"prompt": "hello"}))).await;

        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.content.len(), 1);
        assert_eq!(text_of(&result), "stub response");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn max_tokens_defaults_to_the_cap() {
        let provider = Arc::new(StubProvider::default());
        let tool = tool_with(provider.clone());

        tool.call(arguments(json!({"prompt": "x"}))).await;

        assert_eq!(*provider.last_max_tokens.lock().unwrap(), Some(MAX_TOKENS));
    }

    #[tokio::test]
    async fn max_tokens_is_clamped() {
        let provider = Arc::new(StubProvider::default());
        let tool = tool_with(provider.clone());

        tool.call(arguments(json!({"prompt": "x", "maxTokens": 999999}))).await;
        assert_eq!(*provider.last_max_tokens.lock().unwrap(), Some(MAX_TOKENS));

        tool.call(arguments(json!({"prompt": "x", "maxTokens": 0}))).await;
        assert_eq!(*provider.last_max_tokens.lock().unwrap(), Some(1));

        tool.call(arguments(json!({"prompt": "x", "maxTokens": 512}))).await;
        assert_eq!(*provider.last_max_tokens.lock().unwrap(), Some(512));
    }

    #[tokio::test]
    async fn missing_arguments_do_not_reach_the_provider() {
        let provider = Arc::new(StubProvider::default());
        let tool = tool_with(provider.clone());

        for arguments in [None, arguments(json!({})), arguments(json!({"prompt": 123}))] {
            let result = tool.call(arguments).await;

            assert_eq!(result.is_error, Some(true));
            assert!(!result.content.is_empty());
            assert!(text_of(&result).starts_with("Error: "));
        }

        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn provider_failure_becomes_an_error_result() {
        let provider = Arc::new(StubProvider::failing());
        let tool = tool_with(provider.clone());

        let result = tool.call(arguments(json!({"prompt": "hello"}))).await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            text_of(&result),
            "Error: Anthropic API error: failed to send request: connection refused"
        );
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn schema_declares_the_token_bounds() {
        let provider = Arc::new(StubProvider::default());
        let tool = tool_with(provider).to_tool();

        assert_eq!(tool.name, "anthropic_claude");

        let schema = serde_json::to_value(tool.input_schema.as_ref()).unwrap();

        assert_eq!(schema["required"], serde_json::json!(["prompt"]));
        assert_eq!(schema["properties"]["prompt"]["type"], "string");
        assert_eq!(schema["properties"]["maxTokens"]["default"], 16384);
        assert_eq!(schema["properties"]["maxTokens"]["minimum"], 1);
        assert_eq!(schema["properties"]["maxTokens"]["maximum"], 16384);
    }
}
