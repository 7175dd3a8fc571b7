use clap::Parser;
use korok_chat::errors::ErrorHandler;
use korok_chat::structs::cli::Cli;
use korok_chat::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(error) = CommandRunner::new().run_command(cli.command).await {
        ErrorHandler::handle_error(&error);
        return Err(error.into());
    }

    Ok(())
}
