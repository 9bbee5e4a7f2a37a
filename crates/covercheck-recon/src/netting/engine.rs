//! Exact-date netting over a full snapshot.

use covercheck_core::types::{CashPosting, CoverPosting, Snapshot};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::action::{classify, ActionKind, ReconciliationAction};
use crate::aggregation::{
    aggregate_cash, aggregate_open_cover, by_settlement_date, PositionBook, SettlementKey,
};

/// Classifies every bond/settlement-date position in a book.
///
/// Output is ordered by (settlement date, bond, action name) ascending.
#[must_use]
pub fn classify_book(book: PositionBook<SettlementKey>) -> Vec<ReconciliationAction> {
    let mut actions: Vec<ReconciliationAction> = book
        .into_iter()
        .map(|(key, position)| {
            let short_needed = position.short_needed();
            let c = classify(short_needed, position.open_cover);
            ReconciliationAction {
                action: c.kind,
                bond: key.bond,
                settlement_date: key.settlement_date,
                notional: c.notional,
                reason: c.reason,
                net_cash_qty: position.net_cash,
                open_cover_qty: position.open_cover,
                short_needed,
            }
        })
        .collect();

    actions.sort_by(|a, b| {
        a.settlement_date
            .cmp(&b.settlement_date)
            .then_with(|| a.bond.cmp(&b.bond))
            .then_with(|| a.action.name().cmp(b.action.name()))
    });
    actions
}

/// Nets cash against open cover per bond and exact settlement date.
///
/// Every (bond, date) seen on either side yields exactly one action.
/// Empty inputs yield an empty list.
#[must_use]
pub fn compute_actions(cash: &[CashPosting], covers: &[CoverPosting]) -> Vec<ReconciliationAction> {
    let cash_agg = aggregate_cash(cash, by_settlement_date);
    let cover_agg = aggregate_open_cover(covers, by_settlement_date);
    debug!(
        cash_keys = cash_agg.len(),
        cover_keys = cover_agg.len(),
        "aggregated postings by settlement date"
    );

    let actions = classify_book(PositionBook::join(cash_agg, cover_agg));
    debug!(rows = actions.len(), "classified settlement positions");
    actions
}

/// Convenience wrapper over [`compute_actions`] for a snapshot.
#[must_use]
pub fn compute_snapshot_actions(snapshot: &Snapshot) -> Vec<ReconciliationAction> {
    compute_actions(&snapshot.cash, &snapshot.covers)
}

/// Counts and totals over a list of actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSummary {
    /// Rows needing new cover.
    pub new_cover_count: usize,
    /// Rows with excess cover.
    pub close_cover_count: usize,
    /// Matched rows.
    pub no_action_count: usize,
    /// Total quantity of cover to add.
    pub total_new_cover: i64,
    /// Total quantity of cover to close.
    pub total_close_cover: i64,
}

impl ActionSummary {
    /// Total number of rows.
    #[must_use]
    pub fn total(&self) -> usize {
        self.new_cover_count + self.close_cover_count + self.no_action_count
    }

    /// Number of rows that need the desk to act.
    #[must_use]
    pub fn actionable(&self) -> usize {
        self.new_cover_count + self.close_cover_count
    }

    /// Returns true if every row is matched.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.actionable() == 0
    }
}

/// Summarizes a list of actions.
#[must_use]
pub fn summarize_actions(actions: &[ReconciliationAction]) -> ActionSummary {
    actions
        .iter()
        .fold(ActionSummary::default(), |mut summary, a| {
            match a.action {
                ActionKind::NewCoverNeeded => {
                    summary.new_cover_count += 1;
                    summary.total_new_cover =
                        summary.total_new_cover.saturating_add(a.notional);
                }
                ActionKind::CloseCover => {
                    summary.close_cover_count += 1;
                    summary.total_close_cover =
                        summary.total_close_cover.saturating_add(a.notional);
                }
                ActionKind::NoAction => summary.no_action_count += 1,
            }
            summary
        })
}
