//! Property-based tests for reconciliation invariants.
//!
//! These tests verify laws that should hold for any snapshot:
//! - Cash sign follows side
//! - Closed covers never contribute
//! - Every key on either side yields exactly one output row
//! - Classification is exhaustive with |short - cover| notional
//! - Identical inputs give identical outputs

use std::collections::BTreeSet;

use covercheck_recon::aggregation::{
    aggregate_cash, aggregate_open_cover, by_settlement_date, SettlementKey,
};
use covercheck_recon::netting::classify;
use covercheck_recon::prelude::*;
use proptest::prelude::*;

// =============================================================================
// GENERATORS
// =============================================================================

const BONDS: [&str; 4] = ["BOND_A", "BOND_B", "BOND_C", "BOND_D"];

fn as_of() -> Date {
    Date::from_ymd(2025, 6, 13).unwrap()
}

fn cash_strategy() -> impl Strategy<Value = CashPosting> {
    (0..BONDS.len(), -2i64..6, any::<bool>(), 0u64..20_000_000).prop_map(
        |(bond, offset, buy, qty)| {
            let side = if buy { Side::Buy } else { Side::Sell };
            CashPosting::new(BONDS[bond], as_of().add_days(offset), side, qty)
        },
    )
}

fn cover_strategy() -> impl Strategy<Value = CoverPosting> {
    (0..BONDS.len(), -2i64..6, any::<bool>(), 0u64..20_000_000).prop_map(
        |(bond, offset, open, qty)| {
            let status = if open {
                CoverStatus::Open
            } else {
                CoverStatus::Closed
            };
            CoverPosting::new(BONDS[bond], as_of().add_days(offset), qty, status)
        },
    )
}

fn snapshot_strategy() -> impl Strategy<Value = Snapshot> {
    (
        prop::collection::vec(cash_strategy(), 0..30),
        prop::collection::vec(cover_strategy(), 0..30),
    )
        .prop_map(|(cash, covers)| Snapshot::new(cash, covers))
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_sign_law(qtys in prop::collection::vec(0u64..10_000_000, 1..10), buy in any::<bool>()) {
        let side = if buy { Side::Buy } else { Side::Sell };
        let postings: Vec<_> = qtys
            .iter()
            .map(|q| CashPosting::new("BOND_A", as_of(), side, *q))
            .collect();
        let total: i64 = qtys.iter().map(|q| *q as i64).sum();

        let agg = aggregate_cash(&postings, by_settlement_date);
        let net = agg[&SettlementKey::new("BOND_A", as_of())];
        prop_assert_eq!(net, if buy { total } else { -total });
    }

    #[test]
    fn prop_mixed_sides_net_arithmetically(snapshot in snapshot_strategy()) {
        let agg = aggregate_cash(&snapshot.cash, by_settlement_date);
        let grand_total: i64 = agg.values().sum();
        let expected: i64 = snapshot.cash.iter().map(CashPosting::signed_quantity).sum();
        prop_assert_eq!(grand_total, expected);
    }

    #[test]
    fn prop_closed_covers_contribute_nothing(snapshot in snapshot_strategy(), extra in 1u64..50_000_000) {
        let mut with_closed = snapshot.covers.clone();
        with_closed.push(CoverPosting::closed("BOND_A", as_of(), extra));
        with_closed.push(CoverPosting::closed("BOND_Z", as_of(), extra));

        prop_assert_eq!(
            aggregate_open_cover(&snapshot.covers, by_settlement_date),
            aggregate_open_cover(&with_closed, by_settlement_date)
        );

        let before = compute_actions(&snapshot.cash, &snapshot.covers);
        let after = compute_actions(&snapshot.cash, &with_closed);
        prop_assert_eq!(before, after);
    }

    #[test]
    fn prop_netting_outer_union_complete(snapshot in snapshot_strategy()) {
        let mut expected: BTreeSet<(Date, String)> = snapshot
            .cash
            .iter()
            .map(|p| (p.settlement_date, p.bond.to_string()))
            .collect();
        expected.extend(
            snapshot
                .open_covers()
                .map(|c| (c.settlement_date, c.bond.to_string())),
        );

        let actions = compute_snapshot_actions(&snapshot);
        let seen: Vec<(Date, String)> = actions
            .iter()
            .map(|a| (a.settlement_date, a.bond.to_string()))
            .collect();

        prop_assert_eq!(seen.len(), expected.len());
        let seen_set: BTreeSet<_> = seen.into_iter().collect();
        prop_assert_eq!(seen_set, expected);
    }

    #[test]
    fn prop_actions_sorted(snapshot in snapshot_strategy()) {
        let actions = compute_snapshot_actions(&snapshot);
        for pair in actions.windows(2) {
            let a = (pair[0].settlement_date, &pair[0].bond, pair[0].action.name());
            let b = (pair[1].settlement_date, &pair[1].bond, pair[1].action.name());
            prop_assert!(a <= b);
        }
    }

    #[test]
    fn prop_classification_exhaustive(short in 0i64..1_000_000_000, cover in 0i64..1_000_000_000) {
        let c = classify(short, cover);
        match c.kind {
            ActionKind::NewCoverNeeded => {
                prop_assert!(short > cover);
                prop_assert_eq!(c.notional, short - cover);
            }
            ActionKind::CloseCover => {
                prop_assert!(cover > short);
                prop_assert_eq!(c.notional, cover - short);
            }
            ActionKind::NoAction => {
                prop_assert_eq!(short, cover);
                prop_assert_eq!(c.notional, 0);
            }
        }
        prop_assert_eq!(c.notional, (short - cover).abs());
    }

    #[test]
    fn prop_dashboard_window_and_universe(snapshot in snapshot_strategy()) {
        let horizons = HorizonSet::default();
        let rows = build_dashboard(&snapshot.cash, &snapshot.covers, as_of(), &horizons);

        let mut expected: BTreeSet<String> = snapshot
            .cash
            .iter()
            .filter(|p| horizons.bucket(p.settlement_date, as_of()).is_some())
            .map(|p| p.bond.to_string())
            .collect();
        expected.extend(
            snapshot
                .open_covers()
                .filter(|c| horizons.bucket(c.settlement_date, as_of()).is_some())
                .map(|c| c.bond.to_string()),
        );

        let bonds: Vec<String> = rows.iter().map(|r| r.bond.to_string()).collect();
        prop_assert_eq!(bonds.len(), expected.len());
        prop_assert_eq!(bonds.into_iter().collect::<BTreeSet<_>>(), expected);

        for row in &rows {
            prop_assert_eq!(row.positions.len(), 3);
            for p in &row.positions {
                prop_assert_eq!(p.net_break, (-p.cash).max(0) - p.cover);
            }
            let first = row.positions.iter().find(|p| p.net_break != 0);
            match first {
                None => prop_assert_eq!(row.commentary.as_str(), "OK"),
                Some(p) => {
                    let label = format!(" T{}:", p.horizon);
                    prop_assert!(row.commentary.contains(&label));
                }
            }
        }
    }

    #[test]
    fn prop_idempotent(snapshot in snapshot_strategy()) {
        let config = ReconConfig::default();

        let actions_1 = serde_json::to_string(&compute_snapshot_actions(&snapshot)).unwrap();
        let actions_2 = serde_json::to_string(&compute_snapshot_actions(&snapshot)).unwrap();
        prop_assert_eq!(actions_1, actions_2);

        let rows_1 = serde_json::to_string(&build_snapshot_dashboard(&snapshot, as_of(), &config)).unwrap();
        let rows_2 = serde_json::to_string(&build_snapshot_dashboard(&snapshot, as_of(), &config)).unwrap();
        prop_assert_eq!(rows_1, rows_2);
    }

    #[test]
    fn prop_order_independent(snapshot in snapshot_strategy()) {
        let mut reversed = snapshot.clone();
        reversed.cash.reverse();
        reversed.covers.reverse();

        prop_assert_eq!(
            compute_snapshot_actions(&snapshot),
            compute_snapshot_actions(&reversed)
        );
        let config = ReconConfig::default();
        prop_assert_eq!(
            build_snapshot_dashboard(&snapshot, as_of(), &config),
            build_snapshot_dashboard(&reversed, as_of(), &config)
        );
    }
}

#[test]
fn test_empty_input_law() {
    let empty = Snapshot::default();
    assert!(compute_snapshot_actions(&empty).is_empty());
    assert!(build_snapshot_dashboard(&empty, as_of(), &ReconConfig::default()).is_empty());
}
