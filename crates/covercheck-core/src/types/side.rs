//! Trade side and cover status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a cash trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Bought bonds; adds to the position.
    Buy,
    /// Sold bonds; reduces the position, possibly into a short.
    Sell,
}

impl Side {
    /// Parses a side code (`BUY` / `SELL`, case-insensitive).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "BUY" => Some(Side::Buy),
            "SELL" => Some(Side::Sell),
            _ => None,
        }
    }

    /// Returns the wire code for this side.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }

    /// Returns +1 for buys and -1 for sells.
    #[must_use]
    pub fn sign(&self) -> i64 {
        match self {
            Side::Buy => 1,
            Side::Sell => -1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Lifecycle status of a repo cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CoverStatus {
    /// Live cover; counts toward hedge coverage.
    Open,
    /// Historical cover; excluded from every aggregate.
    Closed,
}

impl CoverStatus {
    /// Parses a status code (`OPEN` / `CLOSED`, case-insensitive).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "OPEN" => Some(CoverStatus::Open),
            "CLOSED" => Some(CoverStatus::Closed),
            _ => None,
        }
    }

    /// Returns the wire code for this status.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            CoverStatus::Open => "OPEN",
            CoverStatus::Closed => "CLOSED",
        }
    }

    /// Returns true if the cover is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, CoverStatus::Open)
    }
}

impl fmt::Display for CoverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
