mod anthropic;

pub use anthropic::AnthropicProvider;

use async_trait::async_trait;

/// Trait for the upstream text-generation provider.
///
/// Note for async_trait: we need this trait to be dyn-compatible so the tool
/// layer can hold it behind an `Arc<dyn Provider>` and tests can substitute
/// a stub, so we can't just use plain async trait functions here.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Sends a single prompt upstream and returns the generated text.
    ///
    /// Exactly one network exchange per call. Stateless; concurrent calls
    /// are independent.
    async fn send_message(&self, prompt: &str, max_tokens: u32) -> crate::Result<String>;
}
