use crate::config::constants::{
    DEFAULT_MAX_TOKENS, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    DEFAULT_TEMPERATURE, DEFAULT_TRANSITION_MS, MOONSHOT_API_KEY_ENV, MOONSHOT_BASE_URL,
    MOONSHOT_DEFAULT_MODEL,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_host() -> String {
        DEFAULT_SERVER_HOST.to_string()
    }

    pub fn default_port() -> u16 {
        DEFAULT_SERVER_PORT
    }

    pub fn default_base_url() -> String {
        MOONSHOT_BASE_URL.to_string()
    }

    pub fn default_model() -> String {
        MOONSHOT_DEFAULT_MODEL.to_string()
    }

    pub fn default_max_tokens() -> u32 {
        DEFAULT_MAX_TOKENS
    }

    pub fn default_temperature() -> f32 {
        DEFAULT_TEMPERATURE
    }

    pub fn default_api_key_env() -> String {
        MOONSHOT_API_KEY_ENV.to_string()
    }

    pub fn default_request_timeout_secs() -> u64 {
        DEFAULT_REQUEST_TIMEOUT_SECS
    }

    pub fn default_proxy_url() -> String {
        format!("http://{}:{}", DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT)
    }

    pub fn default_transition_ms() -> u64 {
        DEFAULT_TRANSITION_MS
    }
}
