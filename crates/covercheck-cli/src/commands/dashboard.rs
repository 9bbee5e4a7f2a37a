//! Dashboard command implementation.
//!
//! Shows per-bond cash, cover and net break for each settlement horizon.

use std::io::IsTerminal;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::debug;

use covercheck_core::prelude::*;
use covercheck_ext_file::CsvPostingStore;
use covercheck_recon::types::horizon_label;
use covercheck_recon::{build_snapshot_dashboard, DashboardRow, HorizonSet};

use crate::cli::OutputFormat;
use crate::commands::run_every;
use crate::config::Settings;
use crate::output::{
    fmt_mm, print_csv, print_dynamic_table, print_header, print_info, print_json, status_cell,
};

/// Arguments for the dashboard command.
#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// As-of date (YYYY-MM-DD). Defaults to today (UTC).
    #[arg(long, value_name = "DATE")]
    pub as_of: Option<String>,

    /// Re-render every SECS seconds until Ctrl-C
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub watch: Option<u64>,
}

#[derive(Debug, Serialize)]
struct DashboardReport<'a> {
    as_of: Date,
    horizons: &'a [i64],
    rows: &'a [DashboardRow],
}

/// One bond/horizon cell, flattened for CSV.
#[derive(Debug, Serialize)]
struct DashboardCsvRow<'a> {
    as_of: Date,
    bond: &'a str,
    horizon: i64,
    cash: i64,
    cover: i64,
    net_break: i64,
    commentary: &'a str,
}

/// Execute the dashboard command.
pub fn execute(
    args: DashboardArgs,
    settings: &Settings,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let fixed_as_of = args.as_of.as_deref().map(parse_as_of).transpose()?;

    let Some(secs) = args.watch else {
        let as_of = fixed_as_of.unwrap_or_else(Date::today_utc);
        return render(settings, as_of, format, quiet);
    };

    let clear = format == OutputFormat::Table && std::io::stdout().is_terminal();
    run_every(Duration::from_secs(secs), |tick| {
        if clear {
            print!("\x1B[2J\x1B[H");
        }
        // Without a fixed date the window follows the clock.
        let as_of = fixed_as_of.unwrap_or_else(Date::today_utc);
        debug!(tick, %as_of, "Refreshing dashboard");
        render(settings, as_of, format, quiet)?;
        Ok(true)
    })?;
    Ok(())
}

fn render(settings: &Settings, as_of: Date, format: OutputFormat, quiet: bool) -> Result<()> {
    let store = CsvPostingStore::in_dir(&settings.data_dir);
    let snapshot = store.load_snapshot()?;
    let horizons = &settings.recon.horizons;
    let rows = build_snapshot_dashboard(&snapshot, as_of, &settings.recon);

    match format {
        OutputFormat::Table => {
            if !quiet {
                print_header(&format!("Horizon Dashboard as of {as_of}"));
            }
            print_dynamic_table(
                table_header(horizons),
                rows.iter().map(|r| table_row(r, horizons)).collect(),
            );
            if !quiet {
                let breaks = rows.iter().filter(|r| r.has_break()).count();
                print_info(&format!("{} bonds, {} with breaks", rows.len(), breaks));
            }
        }
        OutputFormat::Json => print_json(&DashboardReport {
            as_of,
            horizons: horizons.offsets(),
            rows: &rows,
        })?,
        OutputFormat::Csv => {
            let flat: Vec<DashboardCsvRow<'_>> = rows
                .iter()
                .flat_map(|row| {
                    row.positions.iter().map(move |p| DashboardCsvRow {
                        as_of,
                        bond: row.bond.as_str(),
                        horizon: p.horizon,
                        cash: p.cash,
                        cover: p.cover,
                        net_break: p.net_break,
                        commentary: &row.commentary,
                    })
                })
                .collect();
            print_csv(&flat)?;
        }
    }
    Ok(())
}

fn table_header(horizons: &HorizonSet) -> Vec<String> {
    let mut header = vec!["Bond".to_string()];
    for h in horizons.iter() {
        let label = horizon_label(h);
        header.push(format!("Cash_{label}"));
        header.push(format!("Cover_{label}"));
        header.push(format!("NetBreak_{label}"));
    }
    header.push("Commentary".to_string());
    header
}

fn table_row(row: &DashboardRow, horizons: &HorizonSet) -> Vec<String> {
    let mut cells = vec![row.bond.to_string()];
    for h in horizons.iter() {
        cells.push(fmt_mm(row.cash(h)));
        cells.push(fmt_mm(row.cover(h)));
        let net = row.net_break(h);
        cells.push(status_cell(&fmt_mm(net), net != 0));
    }
    cells.push(status_cell(&row.commentary, row.has_break()));
    cells
}
