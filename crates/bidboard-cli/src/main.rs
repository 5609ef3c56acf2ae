//! bidboard - terminal front-end for the job marketplace.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bidboard::config::{resolve_config, validate_config};
use bidboard::Config;
use clap::{Parser, Subcommand};

mod commands;

const DEFAULT_API_BASE: &str = "http://localhost:9000";

/// bidboard - browse jobs and place bids
#[derive(Parser, Debug)]
#[command(name = "bidboard")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides config and BIDBOARD_API)
    #[arg(long)]
    api: Option<String>,

    /// Log filter (trace, debug, info, warn, error or directives)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the listing card for a job
    Card {
        /// Job identifier
        id: String,
    },

    /// Show the full job details
    Job {
        /// Job identifier
        id: String,
    },

    /// Place a bid on a job
    Bid(commands::BidArgs),
}

fn config_for(cli: &Cli) -> Result<Config> {
    let mut config = resolve_config(cli.config.as_deref(), DEFAULT_API_BASE)
        .context("Failed to load configuration")?;

    if let Some(api) = &cli.api {
        config.api_base = api.clone();
        validate_config(&config).context("Invalid --api value")?;
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config_for(&cli)?;

    bidboard::init_logging(&config.logging).context("Failed to initialize logging")?;
    log::debug!("Using backend at {}", config.api_base);

    match cli.command {
        Commands::Card { id } => commands::card(&config, &id).await,
        Commands::Job { id } => commands::job(&config, &id).await,
        Commands::Bid(args) => commands::bid(&config, args).await,
    }
}
