//! Domain types for settlement cover reconciliation.
//!
//! - [`Date`]: Calendar date for settlement and as-of dates
//! - [`BondId`]: Bond identifier
//! - [`Side`] / [`CoverStatus`]: Trade direction and cover lifecycle
//! - [`CashPosting`] / [`CoverPosting`]: Validated postings
//! - [`CashRecord`] / [`CoverRecord`]: Raw stored rows
//! - [`Snapshot`]: Both posting streams at one moment

mod bond_id;
mod date;
mod posting;
mod record;
mod side;
mod snapshot;

pub use bond_id::BondId;
pub use date::{parse_as_of, Date};
pub use posting::{CashPosting, CoverPosting, MAX_QUANTITY};
pub use record::{CashRecord, CoverRecord};
pub use side::{CoverStatus, Side};
pub use snapshot::Snapshot;
