use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, MAX_TRANSITION_MS};
use crate::errors::{KorokError, KorokResult};
use crate::structs::config::ai_config::AiConfig;
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# Korok Chat Configuration

[server]
# Address the completion proxy listens on
host = "127.0.0.1"
port = 3000

[ai]
# Any OpenAI-compatible chat-completion endpoint
base_url = "https://api.moonshot.cn/v1"
model = "moonshot-v1-8k"
temperature = 0.8
max_tokens = 150

# The bearer credential is never stored here; it is read from this variable
api_key_env = "MOONSHOT_API_KEY"

# Seconds before an upstream request is abandoned
request_timeout_secs = 60

# Uncomment to replace the built-in Korok persona
# persona_prompt = "..."

[client]
# Where `korok-chat chat` sends messages
proxy_url = "http://127.0.0.1:3000"

# Pause between the picker and the chat view, in milliseconds
transition_ms = 500
"#;

pub struct ConfigManager;

impl ConfigManager {

    pub fn config_path() -> KorokResult<PathBuf> {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| KorokError::config_error(
                "Could not determine home directory",
                None,
                Some("Set the HOME environment variable"),
            ))
    }

    pub fn load() -> KorokResult<Config> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Reads `path`, falling back to defaults when the file does not exist.
    pub fn load_from(path: &Path) -> KorokResult<Config> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| KorokError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn create_sample_config() -> KorokResult<PathBuf> {
        let path = Self::config_path()?;
        Self::create_sample_config_at(&path)?;
        Ok(path)
    }

    pub fn create_sample_config_at(path: &Path) -> KorokResult<()> {
        if path.exists() {
            return Err(KorokError::ConfigurationFileError {
                path: path.display().to_string(),
                reason: "file already exists".to_string(),
            });
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, SAMPLE_CONFIG)?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.server.host.trim().is_empty() {
            errors.push("server.host must not be empty".to_string());
        }
        if config.server.port == 0 {
            errors.push("server.port must be between 1 and 65535".to_string());
        }

        if !is_http_url(&config.ai.base_url) {
            errors.push(format!("ai.base_url is not an http(s) URL: {}", config.ai.base_url));
        }
        if config.ai.model.trim().is_empty() {
            errors.push("ai.model must not be empty".to_string());
        }
        if !(0.0..=2.0).contains(&config.ai.temperature) {
            errors.push(format!("ai.temperature must be within 0.0..=2.0, got {}", config.ai.temperature));
        }
        if config.ai.max_tokens == 0 {
            errors.push("ai.max_tokens must be greater than zero".to_string());
        }
        if config.ai.api_key_env.trim().is_empty() {
            errors.push("ai.api_key_env must name an environment variable".to_string());
        }
        if config.ai.request_timeout_secs == 0 {
            errors.push("ai.request_timeout_secs must be greater than zero".to_string());
        }

        if !is_http_url(&config.client.proxy_url) {
            errors.push(format!("client.proxy_url is not an http(s) URL: {}", config.client.proxy_url));
        }
        if config.client.transition_ms > MAX_TRANSITION_MS {
            errors.push(format!(
                "client.transition_ms must be at most {}, got {}",
                MAX_TRANSITION_MS, config.client.transition_ms
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Reads the upstream credential from the environment variable the config names.
    pub fn resolve_api_key(ai: &AiConfig) -> KorokResult<String> {
        match std::env::var(&ai.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(KorokError::config_error(
                &format!("{} is not set", ai.api_key_env),
                Some("ai.api_key_env"),
                Some(&format!("export {}=<your api key>", ai.api_key_env)),
            )),
        }
    }
}

fn is_http_url(value: &str) -> bool {
    match reqwest::Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host().is_some(),
        Err(_) => false,
    }
}
