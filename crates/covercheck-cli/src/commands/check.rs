//! Check command implementation.
//!
//! Nets cash against open cover per bond and exact settlement date.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use covercheck_core::PostingSource;
use covercheck_ext_file::CsvPostingStore;
use covercheck_recon::{
    compute_snapshot_actions, summarize_actions, ActionSummary, ReconciliationAction,
};

use crate::cli::OutputFormat;
use crate::config::Settings;
use crate::output::{
    fmt_mm, print_csv, print_header, print_json, print_table, status_cell, KeyValue,
};

/// Table view of one action.
#[derive(Debug, Tabled)]
struct ActionRow {
    #[tabled(rename = "Settle")]
    settle: String,
    #[tabled(rename = "Bond")]
    bond: String,
    #[tabled(rename = "Action")]
    action: String,
    #[tabled(rename = "Notional")]
    notional: String,
    #[tabled(rename = "Net Cash")]
    net_cash: String,
    #[tabled(rename = "Open Cover")]
    open_cover: String,
    #[tabled(rename = "Reason")]
    reason: String,
}

impl From<&ReconciliationAction> for ActionRow {
    fn from(a: &ReconciliationAction) -> Self {
        Self {
            settle: a.settlement_date.to_string(),
            bond: a.bond.to_string(),
            action: status_cell(a.action.name(), a.action.requires_action()),
            notional: fmt_mm(a.notional),
            net_cash: fmt_mm(a.net_cash_qty),
            open_cover: fmt_mm(a.open_cover_qty),
            reason: a.reason.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    actions: &'a [ReconciliationAction],
    summary: ActionSummary,
}

/// Execute the check command.
pub fn execute(settings: &Settings, format: OutputFormat, quiet: bool) -> Result<()> {
    let store = CsvPostingStore::in_dir(&settings.data_dir);
    let snapshot = store.load_snapshot()?;

    let actions = compute_snapshot_actions(&snapshot);
    let summary = summarize_actions(&actions);
    info!(
        actions = actions.len(),
        actionable = summary.actionable(),
        "Netting complete"
    );

    match format {
        OutputFormat::Table => {
            if !quiet {
                print_header("Repo Cover Actions");
            }
            let rows: Vec<ActionRow> = actions.iter().map(ActionRow::from).collect();
            print_table(&rows);

            if !quiet {
                print_header("Summary");
                print_table(&summary_rows(&summary));
            }
        }
        OutputFormat::Json => print_json(&CheckReport {
            actions: &actions,
            summary,
        })?,
        OutputFormat::Csv => print_csv(&actions)?,
    }

    Ok(())
}

fn summary_rows(summary: &ActionSummary) -> Vec<KeyValue> {
    vec![
        KeyValue::new("New cover needed", summary.new_cover_count.to_string()),
        KeyValue::new("Cover to add", fmt_mm(summary.total_new_cover)),
        KeyValue::new("Close cover", summary.close_cover_count.to_string()),
        KeyValue::new("Cover to close", fmt_mm(summary.total_close_cover)),
        KeyValue::new("No action", summary.no_action_count.to_string()),
    ]
}
