use thiserror::Error;

/// Errors from the Anthropic upstream.
///
/// Every variant that originates from the API identifies the upstream in its
/// display output, so the tool layer can surface the message as-is.
#[derive(Debug, Error)]
pub enum LlmError {
    /// No non-empty API key was available at construction time.
    #[error("Anthropic API key is required")]
    MissingApiKey,

    /// Authentication failed (missing or invalid API key).
    #[error("Anthropic API error: authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Insufficient quota or credits.
    #[error("Anthropic API error: insufficient quota: {0}")]
    InsufficientQuota(String),

    /// Rate limit exceeded.
    #[error("Anthropic API error: rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Invalid request parameters.
    #[error("Anthropic API error: invalid request: {0}")]
    InvalidRequest(String),

    /// The API returned a non-success status not covered above.
    #[error("Anthropic API error ({status}): {message}")]
    ApiError {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error body returned by the API.
        message: String,
    },

    /// Network or connection error.
    #[error("Anthropic API error: {0}")]
    Connection(String),

    /// The response body could not be parsed.
    #[error("Anthropic API error: malformed response: {0}")]
    MalformedResponse(String),

    /// Failure assembling the HTTP client. Details are logged where the
    /// error is created and should not leak to callers.
    #[error("Internal client error")]
    InternalError,
}
