pub mod ai_provider_error;
pub mod character;
pub mod commands;
pub mod proxy_outcome;
pub mod reply_source;
pub mod screen;
