//! Validated cash and cover postings.

use serde::{Deserialize, Serialize};

use super::{BondId, CoverStatus, Date, Side};

/// Largest quantity a posting may carry; signed sums are `i64`.
pub const MAX_QUANTITY: u64 = i64::MAX as u64;

/// Converts a raw quantity to `i64`, saturating at [`MAX_QUANTITY`].
fn to_signed(quantity: u64) -> i64 {
    i64::try_from(quantity).unwrap_or(i64::MAX)
}

/// A single cash trade in a bond.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CashPosting {
    /// Bond traded.
    pub bond: BondId,
    /// Contractual settlement date.
    pub settlement_date: Date,
    /// Buy or sell.
    pub side: Side,
    /// Face quantity (unsigned).
    pub quantity: u64,
}

impl CashPosting {
    /// Creates a new cash posting.
    pub fn new(bond: impl Into<BondId>, settlement_date: Date, side: Side, quantity: u64) -> Self {
        Self {
            bond: bond.into(),
            settlement_date,
            side,
            quantity,
        }
    }

    /// Shorthand for a buy.
    pub fn buy(bond: impl Into<BondId>, settlement_date: Date, quantity: u64) -> Self {
        Self::new(bond, settlement_date, Side::Buy, quantity)
    }

    /// Shorthand for a sell.
    pub fn sell(bond: impl Into<BondId>, settlement_date: Date, quantity: u64) -> Self {
        Self::new(bond, settlement_date, Side::Sell, quantity)
    }

    /// Quantity signed by side: positive for buys, negative for sells.
    #[must_use]
    pub fn signed_quantity(&self) -> i64 {
        self.side.sign() * to_signed(self.quantity)
    }
}

/// A single repo cover.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoverPosting {
    /// Bond borrowed.
    pub bond: BondId,
    /// Settlement date the cover applies to.
    pub settlement_date: Date,
    /// Cover quantity.
    pub quantity: u64,
    /// Open or closed.
    pub status: CoverStatus,
}

impl CoverPosting {
    /// Creates a new cover posting.
    pub fn new(
        bond: impl Into<BondId>,
        settlement_date: Date,
        quantity: u64,
        status: CoverStatus,
    ) -> Self {
        Self {
            bond: bond.into(),
            settlement_date,
            quantity,
            status,
        }
    }

    /// Shorthand for an open cover.
    pub fn open(bond: impl Into<BondId>, settlement_date: Date, quantity: u64) -> Self {
        Self::new(bond, settlement_date, quantity, CoverStatus::Open)
    }

    /// Shorthand for a closed cover.
    pub fn closed(bond: impl Into<BondId>, settlement_date: Date, quantity: u64) -> Self {
        Self::new(bond, settlement_date, quantity, CoverStatus::Closed)
    }

    /// Returns true if this cover counts toward coverage.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }

    /// Cover quantity as `i64`.
    #[must_use]
    pub fn signed_quantity(&self) -> i64 {
        to_signed(self.quantity)
    }
}
