//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::commands::{DashboardArgs, GenerateArgs, InitArgs, SimulateArgs};

/// Covercheck - Repo cover reconciliation for cash bond settlements
#[derive(Parser)]
#[command(name = "covercheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding cash_trades.csv and repo_trades.csv
    #[arg(long, env = "COVERCHECK_DATA_DIR", global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Create the data directory with header-only trade files
    Init(InitArgs),

    /// Net cash against open cover per bond and settlement date
    Check,

    /// Show per-bond breaks across settlement horizons
    Dashboard(DashboardArgs),

    /// Append a batch of synthetic cash trades and repo covers
    Generate(GenerateArgs),

    /// Append synthetic batches on a timer
    Simulate(SimulateArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
