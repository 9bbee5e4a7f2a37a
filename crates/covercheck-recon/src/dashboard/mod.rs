//! Horizon dashboard.
//!
//! Buckets postings by day offset from an as-of date (T0, T1, T2 by
//! default) and reports, per bond and horizon:
//!
//! ```text
//! net_break[h] = max(-cash[h], 0) - cover[h]
//! ```
//!
//! Positive breaks are under-covered, negative over-covered. Each row carries
//! one commentary string describing its earliest breaking horizon.

mod builder;
mod row;

pub use builder::*;
pub use row::*;
