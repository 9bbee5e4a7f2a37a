//! Group-by-and-sum over postings, and the outer join of the two sides.

use std::collections::BTreeMap;

use covercheck_core::types::{CashPosting, CoverPosting};
use serde::{Deserialize, Serialize};

/// Sums signed cash quantities per key, saturating at the `i64` bounds.
///
/// Postings whose key is `None` are dropped. Empty input yields an empty map.
pub fn aggregate_cash<K, F>(postings: &[CashPosting], key: F) -> BTreeMap<K, i64>
where
    K: Ord,
    F: Fn(&CashPosting) -> Option<K>,
{
    let mut totals = BTreeMap::new();
    for posting in postings {
        if let Some(k) = key(posting) {
            let total = totals.entry(k).or_insert(0i64);
            *total = total.saturating_add(posting.signed_quantity());
        }
    }
    totals
}

/// Sums OPEN cover quantities per key, saturating at `i64::MAX`.
///
/// Closed covers are skipped before keying. Postings whose key is `None`
/// are dropped. Empty input yields an empty map.
pub fn aggregate_open_cover<K, F>(covers: &[CoverPosting], key: F) -> BTreeMap<K, i64>
where
    K: Ord,
    F: Fn(&CoverPosting) -> Option<K>,
{
    let mut totals = BTreeMap::new();
    for cover in covers.iter().filter(|c| c.is_open()) {
        if let Some(k) = key(cover) {
            let total = totals.entry(k).or_insert(0i64);
            *total = total.saturating_add(cover.signed_quantity());
        }
    }
    totals
}

/// Net cash and open cover for one key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetPosition {
    /// Signed net cash quantity.
    pub net_cash: i64,
    /// Summed open cover quantity.
    pub open_cover: i64,
}

impl NetPosition {
    /// Creates a new net position.
    #[must_use]
    pub fn new(net_cash: i64, open_cover: i64) -> Self {
        Self {
            net_cash,
            open_cover,
        }
    }

    /// Magnitude of the uncovered short; zero when net long or flat.
    #[must_use]
    pub fn short_needed(&self) -> i64 {
        self.net_cash.saturating_neg().max(0)
    }

    /// Residual exposure: positive is under-covered, negative over-covered.
    #[must_use]
    pub fn net_break(&self) -> i64 {
        self.short_needed().saturating_sub(self.open_cover)
    }
}

/// Outer join of a cash aggregate and a cover aggregate.
///
/// Every key present on either side appears exactly once; the missing side
/// reads as zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionBook<K: Ord> {
    positions: BTreeMap<K, NetPosition>,
}

impl<K: Ord> PositionBook<K> {
    /// Joins the two aggregates on their keys.
    pub fn join(cash: BTreeMap<K, i64>, cover: BTreeMap<K, i64>) -> Self {
        let mut positions: BTreeMap<K, NetPosition> = cash
            .into_iter()
            .map(|(k, net_cash)| (k, NetPosition::new(net_cash, 0)))
            .collect();
        for (k, open_cover) in cover {
            positions.entry(k).or_default().open_cover = open_cover;
        }
        Self { positions }
    }

    /// Returns the position for a key, if either side had postings.
    pub fn get(&self, key: &K) -> Option<&NetPosition> {
        self.positions.get(key)
    }

    /// Iterates positions in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &NetPosition)> {
        self.positions.iter()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if neither side had any keyed postings.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl<K: Ord> IntoIterator for PositionBook<K> {
    type Item = (K, NetPosition);
    type IntoIter = std::collections::btree_map::IntoIter<K, NetPosition>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.into_iter()
    }
}
