use serde::{Deserialize, Serialize};
use crate::constants::phrases::{PROXY_UNKNOWN_ERROR, PROXY_UNKNOWN_KIND, PROXY_UPSTREAM_FAILED};
use crate::enums::ai_provider_error::AiProviderError;

/// JSON error body returned by the proxy; client errors carry only `error`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProxyErrorBody {
    pub error: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
}

impl ProxyErrorBody {
    pub fn client(message: &str) -> Self {
        Self {
            error: message.to_string(),
            details: None,
            error_type: None,
        }
    }

    pub fn upstream(error: &AiProviderError) -> Self {
        Self {
            error: PROXY_UPSTREAM_FAILED.to_string(),
            details: Some(error.to_string()),
            error_type: Some(error.kind().to_string()),
        }
    }

    pub fn unknown() -> Self {
        Self {
            error: PROXY_UPSTREAM_FAILED.to_string(),
            details: Some(PROXY_UNKNOWN_ERROR.to_string()),
            error_type: Some(PROXY_UNKNOWN_KIND.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_body_has_only_error_field() {
        let json = serde_json::to_value(ProxyErrorBody::client("无效的消息格式")).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "无效的消息格式" }));
    }

    #[test]
    fn upstream_body_uses_type_key() {
        let json = serde_json::to_value(ProxyErrorBody::upstream(&AiProviderError::NetworkError("refused".into()))).unwrap();
        assert_eq!(json["error"], "API 请求失败");
        assert_eq!(json["type"], "NetworkError");
        assert_eq!(json["details"], "网络错误: refused");
    }
}
