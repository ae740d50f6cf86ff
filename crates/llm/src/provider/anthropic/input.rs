use serde::Serialize;

/// Request body for the Anthropic Messages API.
///
/// Covers the subset of the
/// [Messages API](https://docs.anthropic.com/en/api/messages) this server
/// uses: a single user message, a token limit, and the server-side web
/// search tool.
#[derive(Debug, Serialize)]
pub(super) struct AnthropicRequest {
    /// The model that will complete the prompt.
    pub model: String,

    /// The maximum number of tokens to generate before stopping.
    pub max_tokens: u32,

    /// Server-side tools the model may use. Always the web search tool here.
    pub tools: Vec<AnthropicTool>,

    /// Input messages. Always a single user turn.
    pub messages: Vec<AnthropicMessage>,
}

impl AnthropicRequest {
    pub(super) fn new(model: &str, prompt: &str, max_tokens: u32, max_web_searches: u32) -> Self {
        Self {
            model: model.to_string(),
            max_tokens,
            tools: vec![AnthropicTool {
                r#type: "web_search",
                name: "web_search",
                max_uses: max_web_searches,
            }],
            messages: vec![AnthropicMessage {
                role: AnthropicRole::User,
                content: prompt.to_string(),
            }],
        }
    }
}

/// A server-side tool entry. The provider manages tool invocations itself;
/// the client only declares the tool and its use cap.
#[derive(Debug, Serialize)]
pub(super) struct AnthropicTool {
    pub r#type: &'static str,
    pub name: &'static str,
    pub max_uses: u32,
}

/// A message in the conversation.
#[derive(Debug, Serialize)]
pub(super) struct AnthropicMessage {
    pub role: AnthropicRole,
    pub content: String,
}

/// The role of the message sender.
#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub(super) enum AnthropicRole {
    User,
}

#[cfg(test)]
mod tests {
    use super::AnthropicRequest;

    #[test]
    fn request_shape() {
        let request = AnthropicRequest::new("claude-3-5-sonnet-20241022", "what is new today?", 16384, 2);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["model"], "claude-3-5-sonnet-20241022");
        assert_eq!(value["max_tokens"], 16384);
        assert_eq!(value["tools"][0]["type"], "web_search");
        assert_eq!(value["tools"][0]["name"], "web_search");
        assert_eq!(value["tools"][0]["max_uses"], 2);
        assert_eq!(value["messages"].as_array().unwrap().len(), 1);
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "what is new today?");
    }
}
