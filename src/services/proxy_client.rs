use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use crate::constants::phrases::PROXY_UPSTREAM_FAILED;
use crate::errors::{KorokError, KorokResult};
use crate::structs::proxy::chat_request::ChatRequest;
use crate::structs::proxy::chat_turn::ChatTurn;
use crate::traits::completion_client::CompletionClient;

/// Talks to a running completion proxy over HTTP.
#[derive(Clone)]
pub struct ProxyClient {
    client: Client,
    endpoint: String,
}

impl ProxyClient {
    pub fn new(proxy_url: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}/api/chat", proxy_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_for(text: String) -> ChatRequest {
        ChatRequest {
            messages: vec![ChatTurn::user(&text)],
        }
    }

    /// Reads `content` from a success body, or `details` from an error body.
    fn interpret(&self, status: reqwest::StatusCode, body: &Value) -> KorokResult<String> {
        if !status.is_success() {
            let reason = body
                .get("details")
                .and_then(Value::as_str)
                .unwrap_or(PROXY_UPSTREAM_FAILED);
            return Err(KorokError::network_error("chat", Some(&self.endpoint), Some(status.as_u16()), reason));
        }

        body.get("content")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| KorokError::network_error(
                "chat",
                Some(&self.endpoint),
                Some(status.as_u16()),
                "response has no content",
            ))
    }
}

#[async_trait]
impl CompletionClient for ProxyClient {
    async fn complete(&self, text: String) -> KorokResult<String> {
        let response = self.client
            .post(&self.endpoint)
            .json(&Self::request_for(text))
            .send()
            .await?;

        let status = response.status();
        let body: Value = response.json().await?;
        self.interpret(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use serde_json::json;

    #[test]
    fn sends_single_user_turn() {
        let json = serde_json::to_value(ProxyClient::request_for("你好".to_string())).unwrap();
        assert_eq!(json, json!({ "messages": [{ "role": "user", "content": "你好" }] }));
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        assert_eq!(ProxyClient::new("http://127.0.0.1:3000/").endpoint(), "http://127.0.0.1:3000/api/chat");
    }

    #[test]
    fn error_status_uses_details_when_present() {
        let client = ProxyClient::new("http://127.0.0.1:3000");

        let with_details = client.interpret(StatusCode::INTERNAL_SERVER_ERROR, &json!({ "error": "API 请求失败", "details": "upstream down" }));
        assert!(matches!(with_details, Err(KorokError::NetworkError { ref reason, status_code: Some(500), .. }) if reason == "upstream down"));

        let without = client.interpret(StatusCode::BAD_REQUEST, &json!({ "error": "无效的消息格式" }));
        assert!(matches!(without, Err(KorokError::NetworkError { ref reason, .. }) if reason == "API 请求失败"));
    }

    #[test]
    fn success_without_content_is_an_error() {
        let client = ProxyClient::new("http://127.0.0.1:3000");
        assert!(client.interpret(StatusCode::OK, &json!({})).is_err());
        assert_eq!(client.interpret(StatusCode::OK, &json!({ "content": "呀哈哈" })), Ok("呀哈哈".to_string()));
    }
}
