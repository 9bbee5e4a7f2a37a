//! Position aggregation.
//!
//! Turns raw postings into per-key net quantities:
//!
//! - **Cash**: signed sum (BUY positive, SELL negative)
//! - **Cover**: sum of OPEN covers only
//!
//! Keys are produced by a caller-supplied function; a posting whose key is
//! `None` is dropped from the aggregate. Results are `BTreeMap`s, so
//! iteration order depends only on the keys.
//!
//! # Example
//!
//! ```rust
//! use covercheck_core::prelude::*;
//! use covercheck_recon::aggregation::*;
//!
//! let settle = Date::parse("2025-06-16").unwrap();
//! let cash = vec![
//!     CashPosting::buy("BOND_A", settle, 5_000_000),
//!     CashPosting::sell("BOND_A", settle, 7_000_000),
//! ];
//! let covers = vec![CoverPosting::open("BOND_A", settle, 1_000_000)];
//!
//! let book = PositionBook::join(
//!     aggregate_cash(&cash, by_settlement_date),
//!     aggregate_open_cover(&covers, by_settlement_date),
//! );
//! let position = book.get(&SettlementKey::new("BOND_A", settle)).unwrap();
//! assert_eq!(position.short_needed(), 2_000_000);
//! assert_eq!(position.net_break(), 1_000_000);
//! ```

mod keys;
mod positions;

pub use keys::*;
pub use positions::*;
