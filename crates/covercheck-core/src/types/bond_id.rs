//! Bond identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bond identifier (ISIN, CUSIP, or desk ticker such as `BOND_A`).
///
/// Ordered lexically so that report rows sort by bond name.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BondId(String);

impl BondId {
    /// Create a new bond ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BondId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for BondId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for BondId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for BondId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
