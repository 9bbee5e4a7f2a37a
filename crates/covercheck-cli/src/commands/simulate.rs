//! Simulate command implementation.
//!
//! Appends synthetic batches on a timer, as a live desk feed would.

use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use clap::Args;

use covercheck_core::types::Date;
use covercheck_ext_file::CsvPostingStore;

use crate::commands::generate::{append_batch, feed_generator};
use crate::commands::run_every;
use crate::config::Settings;
use crate::output::{print_info, print_success, print_warning};

/// Cash trades appended per iteration.
pub const CASH_PER_ITERATION: usize = 3;

/// Settlement offset of simulated trades.
pub const SIMULATED_DAYS_AHEAD: i64 = 1;

/// Arguments for the simulate command.
#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Seconds between batches
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,

    /// Number of batches to append
    #[arg(long, default_value_t = 30)]
    pub iterations: usize,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Covers are booked on every other iteration, starting with the first.
pub fn covers_for_iteration(iteration: usize) -> usize {
    usize::from(iteration % 2 == 1)
}

/// Execute the simulate command.
pub fn execute(args: SimulateArgs, settings: &Settings, quiet: bool) -> Result<()> {
    if args.iterations == 0 {
        return Ok(());
    }

    let store = CsvPostingStore::in_dir(&settings.data_dir);
    let mut generator = feed_generator(args.seed, &settings.bonds);
    let total = args.iterations;

    let completed = run_every(Duration::from_secs(args.interval), |iteration| {
        let now = Utc::now();
        let settle = Date::from(now.date_naive()).add_days(SIMULATED_DAYS_AHEAD);
        let counts = append_batch(
            &store,
            &mut generator,
            CASH_PER_ITERATION,
            covers_for_iteration(iteration),
            settle,
            now,
        )?;

        if !quiet {
            print_info(&format!(
                "Iteration {}/{}: {} cash, {} repo",
                iteration, total, counts.cash, counts.covers
            ));
        }
        Ok(iteration < total)
    })?;

    if completed < total {
        print_warning(&format!("Stopped after {completed} of {total} iterations"));
    } else if !quiet {
        print_success(&format!("Simulation finished ({total} iterations)"));
    }
    Ok(())
}
