use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;

/// An upstream chat-completion backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AiProvider: Send + Sync {

    /// Sends one system prompt followed by `user_prompts` and returns the reply text.
    async fn chat(&self, system_prompt: String, user_prompts: Vec<String>) -> Result<String, AiProviderError>;
}
