//! Upstream Anthropic client for Periscope.
//!
//! One request/response exchange with the Messages API per call, with
//! web-search augmentation enabled. No sessions, no retries, no caching.

mod error;
mod provider;

pub use error::LlmError;
pub use provider::{AnthropicProvider, Provider};

/// Result alias for upstream operations.
pub type Result<T> = std::result::Result<T, LlmError>;
