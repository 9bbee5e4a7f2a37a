//! Remediation actions and the classification rule.

use covercheck_core::types::{BondId, Date};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the desk needs to do for one bond/date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    /// Short exceeds open cover; book more repo.
    NewCoverNeeded,
    /// Open cover exceeds short; release the excess.
    CloseCover,
    /// Cover matches short exactly.
    NoAction,
}

impl ActionKind {
    /// Wire name, e.g. `NEW_COVER_NEEDED`. Output ordering uses this string.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            ActionKind::NewCoverNeeded => "NEW_COVER_NEEDED",
            ActionKind::CloseCover => "CLOSE_COVER",
            ActionKind::NoAction => "NO_ACTION",
        }
    }

    /// Returns true unless this is `NoAction`.
    #[must_use]
    pub fn requires_action(&self) -> bool {
        !matches!(self, ActionKind::NoAction)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of classifying one short/cover pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Action to take.
    pub kind: ActionKind,
    /// Quantity to add or close; zero for `NoAction`.
    pub notional: i64,
    /// Human-readable reason.
    pub reason: String,
}

/// Classifies a short requirement against open cover.
///
/// Rules, first match wins:
/// 1. `short_needed > open_cover` → `NewCoverNeeded` for the shortfall
/// 2. `open_cover > short_needed` → `CloseCover` for the excess
/// 3. otherwise `NoAction` with zero notional
#[must_use]
pub fn classify(short_needed: i64, open_cover: i64) -> Classification {
    if short_needed > open_cover {
        Classification {
            kind: ActionKind::NewCoverNeeded,
            notional: short_needed.saturating_sub(open_cover),
            reason: format!("Short {short_needed} vs open cover {open_cover}"),
        }
    } else if open_cover > short_needed {
        Classification {
            kind: ActionKind::CloseCover,
            notional: open_cover.saturating_sub(short_needed),
            reason: format!("Excess cover {open_cover} vs short {short_needed}"),
        }
    } else {
        Classification {
            kind: ActionKind::NoAction,
            notional: 0,
            reason: "Cover matches short (or both zero)".to_string(),
        }
    }
}

/// One classified bond/settlement-date row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReconciliationAction {
    /// Action to take.
    pub action: ActionKind,
    /// Bond.
    pub bond: BondId,
    /// Settlement date.
    pub settlement_date: Date,
    /// Quantity to add or close.
    pub notional: i64,
    /// Human-readable reason.
    pub reason: String,
    /// Signed net cash quantity behind the decision.
    pub net_cash_qty: i64,
    /// Open cover quantity behind the decision.
    pub open_cover_qty: i64,
    /// Uncovered short behind the decision.
    pub short_needed: i64,
}
