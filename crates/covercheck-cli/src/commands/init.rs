//! Init command implementation.
//!
//! Creates the data directory with header-only trade files.

use anyhow::{bail, Result};
use clap::Args;
use covercheck_ext_file::CsvPostingStore;

use crate::config::Settings;
use crate::output::print_success;

/// Arguments for the init command.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Truncate trade files that already hold rows
    #[arg(long)]
    pub force: bool,
}

/// Execute the init command.
pub fn execute(args: InitArgs, settings: &Settings, quiet: bool) -> Result<()> {
    let store = CsvPostingStore::in_dir(&settings.data_dir);

    let (cash_rows, cover_rows) = store.row_counts()?;
    if cash_rows + cover_rows > 0 && !args.force {
        bail!(
            "{} already holds {} cash and {} repo rows; pass --force to reset",
            settings.data_dir.display(),
            cash_rows,
            cover_rows
        );
    }

    store.init()?;

    if !quiet {
        print_success(&format!(
            "Initialized {} and {}",
            store.cash_path().display(),
            store.repo_path().display()
        ));
    }
    Ok(())
}
