//! Covercheck CLI - repo cover reconciliation for cash bond settlements.
//!
//! # Usage
//!
//! ```bash
//! # Create header-only trade files in ./data
//! covercheck init
//!
//! # Append a synthetic batch (3 cash, 1 cover, T+1)
//! covercheck generate --seed 7
//!
//! # Net cash against open cover per bond and settlement date
//! covercheck check
//!
//! # Horizon dashboard, refreshed every 5 seconds
//! covercheck dashboard --as-of 2025-06-13 --watch 5
//!
//! # Live feed: a batch every 5 seconds, 30 times
//! covercheck simulate
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use config::Settings;

fn default_log_level(verbose: u8, quiet: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| {
            default_log_level(cli.verbose, cli.quiet).into()
        })))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = Settings::load(cli.data_dir, cli.config.as_deref())?;
    let format = cli.format;
    let quiet = cli.quiet;

    // Execute command
    match cli.command {
        Commands::Init(args) => commands::init::execute(args, &settings, quiet)?,
        Commands::Check => commands::check::execute(&settings, format, quiet)?,
        Commands::Dashboard(args) => commands::dashboard::execute(args, &settings, format, quiet)?,
        Commands::Generate(args) => commands::generate::execute(args, &settings, quiet)?,
        Commands::Simulate(args) => commands::simulate::execute(args, &settings, quiet)?,
    }

    Ok(())
}
