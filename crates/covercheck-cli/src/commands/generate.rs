//! Generate command implementation.
//!
//! Appends one batch of synthetic cash trades and repo covers.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use rand::Rng;
use tracing::info;

use covercheck_core::types::Date;
use covercheck_ext_file::{CsvPostingStore, FeedGenerator};

use crate::commands::parse_date;
use crate::config::Settings;
use crate::output::print_success;

/// Arguments for the generate command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of cash trades to append
    #[arg(long, default_value_t = 3)]
    pub cash: usize,

    /// Number of repo covers to append
    #[arg(long, default_value_t = 1)]
    pub covers: usize,

    /// Settlement offset in days from today (UTC)
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub days_ahead: i64,

    /// Explicit settlement date (YYYY-MM-DD); overrides --days-ahead
    #[arg(long, value_name = "DATE")]
    pub settle_date: Option<String>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Rows appended by one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchCounts {
    /// Cash trades appended.
    pub cash: usize,
    /// Repo covers appended.
    pub covers: usize,
}

/// Builds a generator from an optional seed and the configured bonds.
pub fn feed_generator(seed: Option<u64>, bonds: &[String]) -> FeedGenerator<rand::rngs::StdRng> {
    let generator = match seed {
        Some(seed) => FeedGenerator::seeded(seed),
        None => FeedGenerator::from_entropy(),
    };
    generator.with_bonds(bonds.iter().cloned())
}

/// Appends `cash` trades and `covers` covers settling on `settle`.
///
/// Ids continue from the rows already in each file.
pub fn append_batch<R: Rng>(
    store: &CsvPostingStore,
    generator: &mut FeedGenerator<R>,
    cash: usize,
    covers: usize,
    settle: Date,
    now: DateTime<Utc>,
) -> Result<BatchCounts> {
    let (cash_rows, cover_rows) = store.row_counts()?;

    if cash > 0 {
        let trades = generator.cash_trades(cash, settle, cash_rows + 1, now);
        store.append_cash(&trades)?;
    }
    if covers > 0 {
        let repos = generator.repo_covers(covers, settle, cover_rows + 1, now);
        store.append_covers(&repos)?;
    }

    info!(cash, covers, %settle, "Appended synthetic batch");
    Ok(BatchCounts { cash, covers })
}

/// Execute the generate command.
pub fn execute(args: GenerateArgs, settings: &Settings, quiet: bool) -> Result<()> {
    let store = CsvPostingStore::in_dir(&settings.data_dir);
    let mut generator = feed_generator(args.seed, &settings.bonds);

    let now = Utc::now();
    let settle = match args.settle_date.as_deref() {
        Some(s) => parse_date(s)?,
        None => Date::from(now.date_naive()).add_days(args.days_ahead),
    };

    let counts = append_batch(&store, &mut generator, args.cash, args.covers, settle, now)?;

    if !quiet {
        print_success(&format!(
            "Appended {} cash trades and {} repo covers settling {}",
            counts.cash, counts.covers, settle
        ));
    }
    Ok(())
}
