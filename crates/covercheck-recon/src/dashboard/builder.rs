//! Horizon dashboard construction.

use std::collections::BTreeSet;

use covercheck_core::types::{parse_as_of, BondId, CashPosting, CoverPosting, Date, Snapshot};
use covercheck_core::CovercheckResult;
use tracing::debug;

use super::row::{DashboardRow, HorizonPosition};
use crate::aggregation::{
    aggregate_cash, aggregate_open_cover, by_horizon, HorizonKey, PositionBook,
};
use crate::types::{HorizonSet, ReconConfig};

/// Builds one dashboard row per bond with postings inside the horizon window.
///
/// Postings settling outside `horizons` (relative to `as_of`) are dropped
/// before aggregation; a bond with nothing inside the window gets no row.
/// Rows are ordered by bond and each row carries every horizon in ascending
/// order, zero-filled where a side has no postings.
#[must_use]
pub fn build_dashboard(
    cash: &[CashPosting],
    covers: &[CoverPosting],
    as_of: Date,
    horizons: &HorizonSet,
) -> Vec<DashboardRow> {
    let cash_agg = aggregate_cash(cash, by_horizon(as_of, horizons));
    let cover_agg = aggregate_open_cover(covers, by_horizon(as_of, horizons));
    debug!(
        %as_of,
        cash_keys = cash_agg.len(),
        cover_keys = cover_agg.len(),
        "aggregated postings by horizon"
    );

    let book = PositionBook::join(cash_agg, cover_agg);
    let bonds: BTreeSet<&BondId> = book.iter().map(|(key, _)| &key.bond).collect();

    let rows: Vec<DashboardRow> = bonds
        .into_iter()
        .map(|bond| {
            let positions = horizons
                .iter()
                .map(|h| {
                    let key = HorizonKey::new(bond.clone(), h);
                    let position = book.get(&key).copied().unwrap_or_default();
                    HorizonPosition::new(h, position.net_cash, position.open_cover)
                })
                .collect();
            DashboardRow::new(bond.clone(), positions)
        })
        .collect();

    debug!(
        rows = rows.len(),
        breaks = rows.iter().filter(|r| r.has_break()).count(),
        "built horizon dashboard"
    );
    rows
}

/// Builds the dashboard for a snapshot using the configured horizons.
#[must_use]
pub fn build_snapshot_dashboard(
    snapshot: &Snapshot,
    as_of: Date,
    config: &ReconConfig,
) -> Vec<DashboardRow> {
    build_dashboard(&snapshot.cash, &snapshot.covers, as_of, &config.horizons)
}

/// Parses a caller-supplied as-of date, then builds the dashboard.
///
/// # Errors
///
/// Returns `CovercheckError::InvalidAsOf` without computing anything if
/// `as_of` is not a valid `YYYY-MM-DD` date.
pub fn build_dashboard_from_input(
    snapshot: &Snapshot,
    as_of: &str,
    config: &ReconConfig,
) -> CovercheckResult<Vec<DashboardRow>> {
    let as_of = parse_as_of(as_of)?;
    Ok(build_snapshot_dashboard(snapshot, as_of, config))
}
