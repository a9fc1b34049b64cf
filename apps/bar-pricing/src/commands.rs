pub mod config;
pub mod quote;

use std::path::PathBuf;

use bar_core::AccountPriceRole;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bar-pricing")]
#[command(about = "Resolve what each account tier pays for catalog items.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve prices for the items in a JSON file
    #[command(alias = "q")]
    Quote {
        /// JSON file holding one item or an array of items
        #[arg(long, short)]
        item: PathBuf,

        /// Only print the price for this tier (ceten, exte, normal, staff, vip)
        #[arg(long, short)]
        role: Option<AccountPriceRole>,

        /// Evaluate promotions at this Unix timestamp instead of now
        #[arg(long)]
        at: Option<u64>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the loaded configuration with secrets masked
    #[command(alias = "c")]
    Config,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
