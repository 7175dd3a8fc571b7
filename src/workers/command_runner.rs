use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::sleep_duration_millis;
use crate::enums::character::Character;
use crate::enums::commands::Commands;
use crate::errors::{KorokError, KorokResult};
use crate::services::ai_providers::moonshot::MoonshotProvider;
use crate::services::completion_proxy::CompletionProxy;
use crate::services::proxy_client::ProxyClient;
use crate::structs::config::config::Config;
use crate::ui::chat_controller::ChatController;
use crate::ui::proxy_server::ProxyServer;
use crate::ui::terminal_chat::TerminalChat;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> KorokResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Serve { host, port } => self.serve_command(host, port).await,
            Commands::Chat { proxy_url, character } => self.chat_command(proxy_url, character).await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> KorokResult<()> {
        log::info!("🚀 Initializing korok-chat configuration...");

        let path = ConfigManager::create_sample_config()?;
        log::info!("📝 Edit {} to point at your completion endpoint.", path.display());
        log::info!("🔧 Run 'korok-chat validate' to check your configuration.");
        Ok(())
    }

    fn validate_command(&self) -> KorokResult<()> {
        let config = ConfigManager::load()?;

        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid");
                if ConfigManager::resolve_api_key(&config.ai).is_err() {
                    log::warn!("⚠️ {} is not set; 'serve' will refuse to start", config.ai.api_key_env);
                }
                Ok(())
            }
            Err(errors) => {
                for error in &errors {
                    log::error!("❌ {}", error);
                }
                Err(KorokError::config_error(
                    &format!("{} problem(s) found", errors.len()),
                    None,
                    Some("Fix the listed fields and run 'korok-chat validate' again"),
                ))
            }
        }
    }

    async fn serve_command(&self, host: Option<String>, port: Option<u16>) -> KorokResult<()> {
        let mut config = load_valid_config()?;
        if let Some(host) = host {
            config.server.host = host;
        }
        if let Some(port) = port {
            config.server.port = port;
        }

        let api_key = ConfigManager::resolve_api_key(&config.ai)?;
        let provider = MoonshotProvider::new(api_key, &config.ai)
            .map_err(|e| KorokError::system_error("HTTP client setup", &e.to_string()))?;
        let proxy = CompletionProxy::new(Arc::new(provider), config.ai.persona_prompt.clone());

        let ip: IpAddr = config.server.host.parse().map_err(|_| KorokError::validation_error(
            "server.host",
            &config.server.host,
            "must be an IP address",
            Some("Use 127.0.0.1 or 0.0.0.0"),
        ))?;

        let mut server = ProxyServer::new(proxy);
        server.start(SocketAddr::new(ip, config.server.port)).await?;
        log::info!("🤖 Forwarding to {} with model {}", config.ai.base_url, config.ai.model);

        tokio::signal::ctrl_c().await?;
        server.shutdown().await
    }

    async fn chat_command(&self, proxy_url: Option<String>, character: Option<Character>) -> KorokResult<()> {
        let mut config = load_valid_config()?;
        if let Some(proxy_url) = proxy_url {
            config.client.proxy_url = proxy_url;
        }

        let client = ProxyClient::new(&config.client.proxy_url);
        log::info!("💬 Chatting through {}", client.endpoint());

        let controller = ChatController::new(Arc::new(client), sleep_duration_millis(config.client.transition_ms));
        TerminalChat::new(controller).run_stdio(character).await
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

fn load_valid_config() -> KorokResult<Config> {
    let config = ConfigManager::load()?;
    ConfigManager::validate_config(&config).map_err(|errors| KorokError::config_error(
        &errors.join("; "),
        None,
        Some("Run 'korok-chat validate' for details"),
    ))?;
    Ok(config)
}
