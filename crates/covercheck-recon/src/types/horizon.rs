//! Horizon buckets relative to an as-of date.

use covercheck_core::types::Date;
use covercheck_core::{CovercheckError, CovercheckResult};
use serde::{Deserialize, Serialize};

/// The standard near-term window: T0, T1, T2.
pub const DEFAULT_HORIZONS: [i64; 3] = [0, 1, 2];

/// Ordered, non-empty set of day offsets from the as-of date.
///
/// Stored sorted ascending and de-duplicated; commentary scans in this order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<i64>")]
pub struct HorizonSet(Vec<i64>);

impl HorizonSet {
    /// Creates a horizon set from day offsets.
    ///
    /// # Errors
    ///
    /// Returns `CovercheckError::InvalidHorizons` if `offsets` is empty.
    pub fn new(offsets: impl IntoIterator<Item = i64>) -> CovercheckResult<Self> {
        let mut offsets: Vec<i64> = offsets.into_iter().collect();
        if offsets.is_empty() {
            return Err(CovercheckError::invalid_horizons(
                "at least one horizon is required",
            ));
        }
        offsets.sort_unstable();
        offsets.dedup();
        Ok(Self(offsets))
    }

    /// Returns the day offsets in ascending order.
    #[must_use]
    pub fn offsets(&self) -> &[i64] {
        &self.0
    }

    /// Iterates the offsets in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.0.iter().copied()
    }

    /// Number of horizons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no horizons (never, by construction).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if `offset` is one of the horizons.
    #[must_use]
    pub fn contains(&self, offset: i64) -> bool {
        self.0.binary_search(&offset).is_ok()
    }

    /// Buckets a settlement date against `as_of`.
    ///
    /// Returns `None` when the day offset is not a member of the set.
    #[must_use]
    pub fn bucket(&self, settlement_date: Date, as_of: Date) -> Option<i64> {
        let offset = as_of.days_between(&settlement_date);
        self.contains(offset).then_some(offset)
    }
}

impl Default for HorizonSet {
    fn default() -> Self {
        Self(DEFAULT_HORIZONS.to_vec())
    }
}

impl TryFrom<Vec<i64>> for HorizonSet {
    type Error = CovercheckError;

    fn try_from(offsets: Vec<i64>) -> Result<Self, Self::Error> {
        Self::new(offsets)
    }
}

impl From<HorizonSet> for Vec<i64> {
    fn from(set: HorizonSet) -> Self {
        set.0
    }
}

/// Display label for a horizon, e.g. `T0`.
#[must_use]
pub fn horizon_label(horizon: i64) -> String {
    format!("T{horizon}")
}
