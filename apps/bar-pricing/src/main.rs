//! # bar-pricing
//!
//! Command-line driver for the price resolver.
//!
//! ## Usage
//! ```bash
//! # Full tier table for every item in the file
//! bar-pricing quote --item items.json
//!
//! # One tier, promotions evaluated at a fixed instant, JSON output
//! bar-pricing quote --item items.json --role vip --at 1700000000 --json
//!
//! # Show the effective configuration (secrets masked)
//! bar-pricing config
//! ```

mod commands;

use bar_config::{logging, Config};
use commands::{CommandLine, Commands};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let config = Config::from_env()?;
    logging::init(config.log_level)?;
    info!(config = ?config.redacted(), "Loaded config");

    match commands.command {
        Commands::Quote {
            item,
            role,
            at,
            json,
        } => commands::quote::quote(&item, role, at, json),
        Commands::Config => commands::config::show(&config),
    }
}
