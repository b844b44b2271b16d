use crate::error::NarrativeError;
use async_trait::async_trait;

/// An external text-generation service.
///
/// Implementations send one prompt and return the generated text as-is.
/// Retries and backoff are left to the caller.
#[async_trait]
pub trait NarrativeProvider: Send + Sync {
    /// Sends the prompt and returns the generated text.
    async fn complete(&self, prompt: &str) -> Result<String, NarrativeError>;

    /// Model identifier reported alongside the text.
    fn model_name(&self) -> &str;
}
