use std::sync::Arc;
use serde_json::Value;
use crate::constants::phrases::{PROXY_INVALID_FORMAT, PROXY_LAST_NOT_USER};
use crate::enums::proxy_outcome::ProxyOutcome;
use crate::prompts::korok_persona_prompt::KOROK_PERSONA_PROMPT;
use crate::structs::proxy::chat_reply::ChatReply;
use crate::structs::proxy::proxy_error_body::ProxyErrorBody;
use crate::traits::ai_provider::AiProvider;

/// Stateless bridge between chat clients and the upstream completion API.
///
/// Only the latest user message is forwarded, prefixed with the persona prompt.
/// Every failure is turned into a JSON error body; nothing escapes to the caller.
#[derive(Clone)]
pub struct CompletionProxy {
    provider: Arc<dyn AiProvider>,
    persona_prompt: String,
}

impl CompletionProxy {
    pub fn new(provider: Arc<dyn AiProvider>, persona_prompt: Option<String>) -> Self {
        Self {
            provider,
            persona_prompt: persona_prompt.unwrap_or_else(|| KOROK_PERSONA_PROMPT.to_string()),
        }
    }

    pub fn persona_prompt(&self) -> &str {
        &self.persona_prompt
    }

    /// Validates a raw request body and returns the text of its final user message.
    pub fn extract_user_message(body: &[u8]) -> Result<String, ProxyErrorBody> {
        let invalid = || ProxyErrorBody::client(PROXY_INVALID_FORMAT);

        let json: Value = serde_json::from_slice(body).map_err(|_| invalid())?;
        let last = json
            .get("messages")
            .and_then(Value::as_array)
            .and_then(|messages| messages.last())
            .ok_or_else(invalid)?;

        if last.get("role").and_then(Value::as_str) != Some("user") {
            return Err(ProxyErrorBody::client(PROXY_LAST_NOT_USER));
        }

        last.get("content")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(invalid)
    }

    pub async fn handle(&self, body: &[u8]) -> ProxyOutcome {
        let user_message = match Self::extract_user_message(body) {
            Ok(message) => message,
            Err(error) => {
                log::warn!("⚠️ Rejected chat request: {}", error.error);
                return ProxyOutcome::Rejected(error);
            }
        };

        log::info!("🚀 Forwarding chat request upstream");
        log::debug!("Request content: {}", user_message);

        let provider = Arc::clone(&self.provider);
        let persona_prompt = self.persona_prompt.clone();
        let task = tokio::spawn(async move {
            provider.chat(persona_prompt, vec![user_message]).await
        });

        match task.await {
            Ok(Ok(content)) => {
                log::debug!("Reply content: {}", content);
                ProxyOutcome::Reply(ChatReply { content })
            }
            Ok(Err(error)) => {
                log::error!("❌ Upstream request failed [{}]: {}", error.kind(), error);
                ProxyOutcome::Failed(ProxyErrorBody::upstream(&error))
            }
            Err(join_error) => {
                log::error!("❌ Upstream task aborted: {}", join_error);
                ProxyOutcome::Failed(ProxyErrorBody::unknown())
            }
        }
    }
}
