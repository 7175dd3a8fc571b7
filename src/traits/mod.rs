pub mod ai_provider;
pub mod completion_client;
