use reqwest::{Client, StatusCode};
use async_trait::async_trait;
use crate::config::constants::timeout_duration_secs;
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::moonshot::moonshot_message::MoonshotMessage;
use crate::structs::ai::moonshot::moonshot_request::MoonshotRequest;
use crate::structs::ai::moonshot::moonshot_response::MoonshotResponse;
use crate::structs::config::ai_config::AiConfig;
use crate::traits::ai_provider::AiProvider;

/// Client for the Moonshot chat-completion API, or any endpoint speaking the same schema.
#[derive(Clone)]
pub struct MoonshotProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl MoonshotProvider {
    pub fn new(api_key: String, ai_config: &AiConfig) -> Result<Self, AiProviderError> {
        let client = Client::builder()
            .timeout(timeout_duration_secs(ai_config.request_timeout_secs))
            .build()
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))?;

        Ok(Self {
            api_key,
            base_url: ai_config.base_url.trim_end_matches('/').to_string(),
            client,
            model: ai_config.model.clone(),
            temperature: ai_config.temperature,
            max_tokens: ai_config.max_tokens,
        })
    }

    fn get_moonshot_messages(&self, system_prompt: String, user_prompts: Vec<String>) -> Vec<MoonshotMessage> {
        let mut messages = Vec::with_capacity(user_prompts.len() + 1);

        if !system_prompt.is_empty() {
            messages.push(MoonshotMessage::system(&system_prompt));
        }

        for prompt in user_prompts {
            messages.push(MoonshotMessage::user(&prompt));
        }

        messages
    }

    fn get_request(&self, system_prompt: String, user_prompts: Vec<String>) -> MoonshotRequest {
        MoonshotRequest {
            model: self.model.clone(),
            messages: self.get_moonshot_messages(system_prompt, user_prompts),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            stream: false,
        }
    }

    async fn make_request(&self, url: String, request_body: &MoonshotRequest) -> Result<reqwest::Response, AiProviderError> {
        log::debug!("📦 Request model: {}", request_body.model);

        self.client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))
    }

    fn status_error(status: StatusCode, error_text: String) -> AiProviderError {
        match status {
            StatusCode::UNAUTHORIZED => AiProviderError::AuthenticationError(error_text),
            _ => AiProviderError::ApiError(format!("{}\n{}", status, error_text)),
        }
    }

    fn parse_response(body: &str) -> Result<String, AiProviderError> {
        let response: MoonshotResponse = serde_json::from_str(body)
            .map_err(|e| AiProviderError::SerializationError(e.to_string()))?;

        match response.first_content() {
            Some(content) => Ok(content.to_string()),
            None => {
                log::error!("❌ Unexpected upstream response shape: {}", body);
                Err(AiProviderError::InvalidResponse)
            }
        }
    }
}

#[async_trait]
impl AiProvider for MoonshotProvider {

    async fn chat(&self, system_prompt: String, user_prompts: Vec<String>) -> Result<String, AiProviderError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request_body = self.get_request(system_prompt, user_prompts);

        let response = self.make_request(url, &request_body).await?;
        let status = response.status();
        log::info!("📡 Upstream responded: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            log::error!("❌ Upstream error response: {}", body);
            return Err(Self::status_error(status, body));
        }

        log::debug!("📨 Upstream response body: {}", body);
        Self::parse_response(&body)
    }
}
