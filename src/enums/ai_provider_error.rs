use thiserror::Error;

/// Failures talking to the upstream chat-completion API.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AiProviderError {
    #[error("API 请求失败: {0}")]
    ApiError(String),

    #[error("网络错误: {0}")]
    NetworkError(String),

    #[error("响应解析失败: {0}")]
    SerializationError(String),

    #[error("认证失败: {0}")]
    AuthenticationError(String),

    #[error("API 响应格式不正确")]
    InvalidResponse,
}

impl AiProviderError {
    /// Tag reported to callers in the `type` field of an error body.
    pub fn kind(&self) -> &'static str {
        match self {
            AiProviderError::ApiError(_) => "ApiError",
            AiProviderError::NetworkError(_) => "NetworkError",
            AiProviderError::SerializationError(_) => "SerializationError",
            AiProviderError::AuthenticationError(_) => "AuthenticationError",
            AiProviderError::InvalidResponse => "InvalidResponse",
        }
    }
}
