//! CLI command implementations.

pub mod check;
pub mod dashboard;
pub mod generate;
pub mod init;
pub mod simulate;

// Re-export submodules for convenience
pub use dashboard::DashboardArgs;
pub use generate::GenerateArgs;
pub use init::InitArgs;
pub use simulate::SimulateArgs;

use std::time::Duration;

use covercheck_core::types::Date;
use tokio::time::interval;
use tracing::info;

use crate::error::{CliError, CliResult};

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Runs `tick` every `period` until it returns `false` or Ctrl-C arrives.
///
/// The first tick fires immediately. Returns the number of ticks run.
pub fn run_every<F>(period: Duration, mut tick: F) -> anyhow::Result<usize>
where
    F: FnMut(usize) -> anyhow::Result<bool>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let mut ticker = interval(period);
        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        let mut count = 0;
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    count += 1;
                    if !tick(count)? {
                        break;
                    }
                }
                _ = &mut shutdown => {
                    info!("Interrupted after {} ticks", count);
                    break;
                }
            }
        }
        Ok::<usize, anyhow::Error>(count)
    })
}
