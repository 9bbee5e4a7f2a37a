//! Configuration for reconciliation runs.

use super::HorizonSet;
use serde::{Deserialize, Serialize};

/// Configuration for reconciliation runs.
///
/// The as-of date is not part of the config; it is supplied per call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconConfig {
    /// Horizon buckets used by the dashboard.
    #[serde(default)]
    pub horizons: HorizonSet,
}

impl ReconConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the horizon set.
    #[must_use]
    pub fn with_horizons(mut self, horizons: HorizonSet) -> Self {
        self.horizons = horizons;
        self
    }
}
