use std::time::Duration;

pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const MAX_REQUEST_BODY_BYTES: u64 = 64 * 1024;
pub const SERVER_SHUTDOWN_GRACE_PERIOD_MS: u64 = 100;

pub const MOONSHOT_BASE_URL: &str = "https://api.moonshot.cn/v1";
pub const MOONSHOT_DEFAULT_MODEL: &str = "moonshot-v1-8k";
pub const MOONSHOT_API_KEY_ENV: &str = "MOONSHOT_API_KEY";
pub const DEFAULT_TEMPERATURE: f32 = 0.8;
pub const DEFAULT_MAX_TOKENS: u32 = 150;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

pub const DEFAULT_TRANSITION_MS: u64 = 500;
pub const MAX_TRANSITION_MS: u64 = 10_000;

pub const CONFIG_DIR_NAME: &str = "korok-chat";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}

pub fn timeout_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
