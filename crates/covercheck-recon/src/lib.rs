//! # Covercheck Recon
//!
//! Settlement exposure netting and repo cover classification.
//!
//! Reconciles cash bond trades against repo covers to decide whether short
//! positions are hedged.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: Every operation is a function of a full posting
//!   snapshot (plus an as-of date where relevant); no I/O, no caching
//! - **Deterministic**: Aggregates are ordered maps, outputs are sorted, so
//!   identical inputs give identical outputs
//! - **Two granularities**: Exact settlement date for netting actions,
//!   day-offset horizons for the dashboard
//!
//! ## Quick Start
//!
//! ```rust
//! use covercheck_recon::prelude::*;
//!
//! let as_of = Date::parse("2025-06-13").unwrap();
//! let cash = vec![CashPosting::sell("BOND_B", as_of, 10_000_000)];
//! let covers: Vec<CoverPosting> = vec![];
//!
//! let actions = compute_actions(&cash, &covers);
//! assert_eq!(actions[0].action, ActionKind::NewCoverNeeded);
//!
//! let rows = build_dashboard(&cash, &covers, as_of, &HorizonSet::default());
//! assert_eq!(
//!     rows[0].commentary,
//!     "Need cover T0: missing 10000000 (short 10000000 vs cover 0)"
//! );
//! ```
//!
//! ## Module Overview
//!
//! - [`aggregation`] - Group-by-and-sum of postings, outer join of both sides
//! - [`netting`] - Exact-date classification into remediation actions
//! - [`dashboard`] - Horizon-bucketed breaks and commentary
//! - [`types`] - Horizon set and run configuration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregation;
pub mod dashboard;
pub mod netting;
pub mod types;

pub use types::{HorizonSet, ReconConfig};

pub use aggregation::{
    aggregate_cash, aggregate_open_cover, by_horizon, by_settlement_date, HorizonBucketer,
    HorizonKey, NetPosition, PositionBook, Settlement, SettlementKey,
};

pub use netting::{
    classify, classify_book, compute_actions, compute_snapshot_actions, summarize_actions,
    ActionKind, ActionSummary, Classification, ReconciliationAction,
};

pub use dashboard::{
    build_dashboard, build_dashboard_from_input, build_snapshot_dashboard, commentary,
    BreakStatus, DashboardRow, HorizonPosition,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use covercheck_recon::prelude::*;
/// ```
pub mod prelude {
    pub use crate::types::{HorizonSet, ReconConfig};

    pub use crate::netting::{
        compute_actions, compute_snapshot_actions, summarize_actions, ActionKind, ActionSummary,
        ReconciliationAction,
    };

    pub use crate::dashboard::{
        build_dashboard, build_dashboard_from_input, build_snapshot_dashboard, BreakStatus,
        DashboardRow, HorizonPosition,
    };

    pub use covercheck_core::prelude::*;
}
