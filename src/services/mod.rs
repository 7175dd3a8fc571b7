pub mod ai_providers;
pub mod completion_proxy;
pub mod proxy_client;
