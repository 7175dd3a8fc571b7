use clap::Subcommand;
use crate::enums::character::Character;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Check the configuration file for problems
    Validate,
    /// Run the completion proxy
    Serve {
        #[clap(long)]
        host: Option<String>,
        #[clap(short, long)]
        port: Option<u16>,
    },
    /// Chat with a Korok in the terminal
    Chat {
        #[clap(long)]
        proxy_url: Option<String>,
        #[clap(short, long, value_enum)]
        character: Option<Character>,
    },
}
