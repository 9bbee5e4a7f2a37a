//! Full point-in-time snapshot of both posting streams.

use serde::{Deserialize, Serialize};

use super::{CashPosting, CashRecord, CoverPosting, CoverRecord};
use crate::error::CovercheckResult;

/// Every cash and cover posting visible at one moment.
///
/// Reconciliation always runs over a whole snapshot; nothing is carried
/// from one snapshot to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cash trades.
    pub cash: Vec<CashPosting>,
    /// Repo covers, open and closed.
    pub covers: Vec<CoverPosting>,
}

impl Snapshot {
    /// Creates a snapshot from already-validated postings.
    #[must_use]
    pub fn new(cash: Vec<CashPosting>, covers: Vec<CoverPosting>) -> Self {
        Self { cash, covers }
    }

    /// Validates raw records into a snapshot.
    ///
    /// Fails on the first malformed record; no partial snapshot is returned.
    pub fn from_records(cash: &[CashRecord], covers: &[CoverRecord]) -> CovercheckResult<Self> {
        let cash = cash
            .iter()
            .map(CashRecord::to_posting)
            .collect::<CovercheckResult<Vec<_>>>()?;
        let covers = covers
            .iter()
            .map(CoverRecord::to_posting)
            .collect::<CovercheckResult<Vec<_>>>()?;
        Ok(Self { cash, covers })
    }

    /// Returns true if neither stream has postings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cash.is_empty() && self.covers.is_empty()
    }

    /// Iterates the covers that count toward coverage.
    pub fn open_covers(&self) -> impl Iterator<Item = &CoverPosting> {
        self.covers.iter().filter(|c| c.is_open())
    }
}
