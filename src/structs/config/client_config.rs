use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ClientConfig {
    #[serde(default = "ConfigHelper::default_proxy_url")]
    pub proxy_url: String,

    /// Pause between picker and chat views, in milliseconds.
    #[serde(default = "ConfigHelper::default_transition_ms")]
    pub transition_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            proxy_url: ConfigHelper::default_proxy_url(),
            transition_ms: ConfigHelper::default_transition_ms(),
        }
    }
}
