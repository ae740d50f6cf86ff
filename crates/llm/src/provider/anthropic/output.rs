use serde::Deserialize;

/// Substituted when the upstream response carries no text at all.
pub(super) const NO_RESPONSE: &str = "No response generated";

/// Describes the type of content in an Anthropic message.
#[derive(Debug, Deserialize, PartialEq)]
pub(super) enum ContentType {
    /// Plain text content.
    #[serde(rename = "text")]
    Text,
    /// A server-side tool invocation (web search issues these).
    #[serde(rename = "server_tool_use")]
    ServerToolUse,
    /// Results of a server-side web search.
    #[serde(rename = "web_search_tool_result")]
    WebSearchToolResult,
    /// Any other content type not yet known.
    /// Captures the actual string value for forward compatibility.
    #[serde(untagged)]
    Other(String),
}

/// Response from the Anthropic Messages API.
///
/// Only the fields this server consumes; everything else in the body is
/// ignored.
#[derive(Debug, Deserialize)]
pub(super) struct AnthropicResponse {
    /// Content blocks in the response.
    pub content: Vec<AnthropicContent>,

    /// Billing and rate limit usage information.
    #[serde(default)]
    pub usage: Option<AnthropicUsage>,
}

/// A content block in an Anthropic message response.
#[derive(Debug, Deserialize)]
pub(super) struct AnthropicContent {
    /// The type of this content block.
    pub r#type: ContentType,

    /// Text content if this is a text block.
    /// Will be `None` for non-text content types.
    #[serde(default)]
    pub text: Option<String>,
}

/// Token usage information for a request.
#[derive(Debug, Deserialize, Clone, Copy)]
pub(super) struct AnthropicUsage {
    /// Number of tokens in the input prompt.
    #[serde(default)]
    pub input_tokens: i32,

    /// Number of tokens generated in the response.
    #[serde(default)]
    pub output_tokens: i32,
}

impl AnthropicResponse {
    /// Extracts the text blocks, newline-joined in response order.
    ///
    /// An upstream response with no text (only tool blocks, or an empty
    /// content array) yields [`NO_RESPONSE`].
    pub(super) fn into_text(self) -> String {
        let text = self
            .content
            .into_iter()
            .filter(|block| block.r#type == ContentType::Text)
            .filter_map(|block| block.text)
            .collect::<Vec<_>>()
            .join("\n");

        if text.is_empty() { NO_RESPONSE.to_string() } else { text }
    }
}

#[cfg(test)]
mod tests {
    use super::{AnthropicResponse, ContentType, NO_RESPONSE};

    fn parse(body: &str) -> AnthropicResponse {
        sonic_rs::from_str(body).unwrap()
    }

    #[test]
    fn joins_text_blocks_with_newline() {
        let response = parse(
            r#"{
                "content": [
                    {"type": "text", "text": "A"},
                    {"type": "text", "text": "B"}
                ]
            }"#,
        );

        assert_eq!(response.into_text(), "A\nB");
    }

    #[test]
    fn tool_blocks_are_skipped() {
        let response = parse(
            r#"{
                "content": [
                    {"type": "server_tool_use"},
                    {"type": "text", "text": "the answer"},
                    {"type": "web_search_tool_result"}
                ],
                "usage": {"input_tokens": 12, "output_tokens": 34}
            }"#,
        );

        assert_eq!(response.usage.unwrap().output_tokens, 34);
        assert_eq!(response.into_text(), "the answer");
    }

    #[test]
    fn no_text_blocks_yield_the_sentinel() {
        let response = parse(
            r#"{
                "content": [
                    {"type": "server_tool_use"},
                    {"type": "web_search_tool_result"}
                ]
            }"#,
        );

        assert_eq!(response.into_text(), NO_RESPONSE);
    }

    #[test]
    fn empty_content_yields_the_sentinel() {
        let response = parse(r#"{"content": []}"#);

        assert_eq!(response.into_text(), NO_RESPONSE);
    }

    #[test]
    fn empty_text_blocks_yield_the_sentinel() {
        let response = parse(r#"{"content": [{"type": "text", "text": ""}]}"#);

        assert_eq!(response.into_text(), NO_RESPONSE);
    }

    #[test]
    fn unknown_content_types_are_tolerated() {
        let response = parse(
            r#"{
                "content": [
                    {"type": "thinking", "text": "hidden"},
                    {"type": "text", "text": "visible"}
                ]
            }"#,
        );

        assert_eq!(response.content[0].r#type, ContentType::Other("thinking".to_string()));
        assert_eq!(response.into_text(), "visible");
    }
}
