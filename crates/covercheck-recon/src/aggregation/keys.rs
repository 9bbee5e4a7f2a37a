//! Grouping keys for position aggregation.

use covercheck_core::types::{BondId, CashPosting, CoverPosting, Date};
use serde::{Deserialize, Serialize};

use crate::types::HorizonSet;

/// A posting that settles a bond on a date.
///
/// Lets one key function serve both cash and cover postings.
pub trait Settlement {
    /// Bond being settled.
    fn bond(&self) -> &BondId;
    /// Settlement date.
    fn settlement_date(&self) -> Date;
}

impl Settlement for CashPosting {
    fn bond(&self) -> &BondId {
        &self.bond
    }

    fn settlement_date(&self) -> Date {
        self.settlement_date
    }
}

impl Settlement for CoverPosting {
    fn bond(&self) -> &BondId {
        &self.bond
    }

    fn settlement_date(&self) -> Date {
        self.settlement_date
    }
}

/// Exact-date key: one bond on one settlement date.
///
/// Orders by settlement date first, then bond.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SettlementKey {
    /// Settlement date.
    pub settlement_date: Date,
    /// Bond.
    pub bond: BondId,
}

impl SettlementKey {
    /// Creates a new settlement key.
    pub fn new(bond: impl Into<BondId>, settlement_date: Date) -> Self {
        Self {
            settlement_date,
            bond: bond.into(),
        }
    }
}

/// Horizon key: one bond in one day-offset bucket.
///
/// Orders by bond first, then horizon, so a bond's buckets are adjacent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HorizonKey {
    /// Bond.
    pub bond: BondId,
    /// Day offset from the as-of date.
    pub horizon: i64,
}

impl HorizonKey {
    /// Creates a new horizon key.
    pub fn new(bond: impl Into<BondId>, horizon: i64) -> Self {
        Self {
            bond: bond.into(),
            horizon,
        }
    }
}

/// Keys a posting by its exact settlement date. Always defined.
pub fn by_settlement_date<P: Settlement>(posting: &P) -> Option<SettlementKey> {
    Some(SettlementKey::new(
        posting.bond().clone(),
        posting.settlement_date(),
    ))
}

/// Buckets postings into horizons relative to an as-of date.
#[derive(Debug, Clone, Copy)]
pub struct HorizonBucketer<'a> {
    as_of: Date,
    horizons: &'a HorizonSet,
}

impl<'a> HorizonBucketer<'a> {
    /// Creates a bucketer for `as_of` over `horizons`.
    #[must_use]
    pub fn new(as_of: Date, horizons: &'a HorizonSet) -> Self {
        Self { as_of, horizons }
    }

    /// The as-of date.
    #[must_use]
    pub fn as_of(&self) -> Date {
        self.as_of
    }

    /// Keys a posting by horizon; `None` if it settles outside every bucket.
    pub fn key<P: Settlement>(&self, posting: &P) -> Option<HorizonKey> {
        self.horizons
            .bucket(posting.settlement_date(), self.as_of)
            .map(|h| HorizonKey::new(posting.bond().clone(), h))
    }
}

/// Key function bucketing postings into `horizons` relative to `as_of`.
pub fn by_horizon<P: Settlement>(
    as_of: Date,
    horizons: &HorizonSet,
) -> impl Fn(&P) -> Option<HorizonKey> + '_ {
    let bucketer = HorizonBucketer::new(as_of, horizons);
    move |posting| bucketer.key(posting)
}
