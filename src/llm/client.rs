use anyhow::Result;
use async_trait::async_trait;

use crate::llm::openai::OpenAiClient;

#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Issue one chat completion: a system instruction plus one user turn.
    /// Returns the raw completion text.
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}

/// Build a chat provider from runtime configuration.
pub fn build_provider(
    provider: &str,
    api_key: &str,
    model: &str,
    endpoint: &str,
) -> Result<Box<dyn ChatProvider>> {
    match provider.to_lowercase().as_str() {
        "openai" => Ok(Box::new(OpenAiClient::new(api_key, model, endpoint)?)),
        other => anyhow::bail!(
            "Unsupported llm.provider '{}'. Supported providers: openai",
            other
        ),
    }
}
