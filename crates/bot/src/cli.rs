use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chanlist")]
#[command(author, version, about = "Telegram bot that catalogs channels by category", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot with long polling (default)
    Run,

    /// Print the newest stored channels of a category
    List {
        /// Category label, exactly as shown in the bot menu
        category: String,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
