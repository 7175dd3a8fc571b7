use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "korok-chat")]
#[clap(about = "Chat with a Korok through an LLM completion proxy", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
