//! Dashboard row types and commentary.

use covercheck_core::types::BondId;
use serde::{Deserialize, Serialize};

use crate::types::horizon_label;

/// Direction of a horizon's net break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BreakStatus {
    /// Net break is zero.
    Matched,
    /// Short exceeds cover.
    UnderCovered,
    /// Cover exceeds short.
    OverCovered,
}

/// Cash, cover, and net break for one bond in one horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HorizonPosition {
    /// Day offset from the as-of date.
    pub horizon: i64,
    /// Signed net cash.
    pub cash: i64,
    /// Open cover.
    pub cover: i64,
    /// `max(-cash, 0) - cover`.
    pub net_break: i64,
}

impl HorizonPosition {
    /// Creates a position and derives its net break.
    #[must_use]
    pub fn new(horizon: i64, cash: i64, cover: i64) -> Self {
        Self {
            horizon,
            cash,
            cover,
            net_break: cash.saturating_neg().max(0).saturating_sub(cover),
        }
    }

    /// Uncovered short magnitude.
    #[must_use]
    pub fn short(&self) -> i64 {
        self.cash.saturating_neg().max(0)
    }

    /// Direction of the break.
    #[must_use]
    pub fn status(&self) -> BreakStatus {
        match self.net_break {
            0 => BreakStatus::Matched,
            b if b > 0 => BreakStatus::UnderCovered,
            _ => BreakStatus::OverCovered,
        }
    }

    /// Message describing this horizon's break, or `None` when matched.
    #[must_use]
    pub fn describe_break(&self) -> Option<String> {
        let label = horizon_label(self.horizon);
        let short = self.short();
        let cover = self.cover;
        match self.status() {
            BreakStatus::Matched => None,
            BreakStatus::UnderCovered => Some(format!(
                "Need cover {label}: missing {} (short {short} vs cover {cover})",
                self.net_break
            )),
            BreakStatus::OverCovered => {
                let excess = self.net_break.unsigned_abs();
                if short == 0 {
                    Some(format!(
                        "Close cover {label}: excess {excess} (no short, cover {cover})"
                    ))
                } else {
                    Some(format!(
                        "Reduce/Close cover {label}: excess {excess} (short {short} vs cover {cover})"
                    ))
                }
            }
        }
    }
}

/// Commentary value when no horizon breaks.
pub const OK_COMMENTARY: &str = "OK";

/// Builds the single commentary string for a row.
///
/// Reports only the first breaking horizon in the given order; later breaks
/// are not mentioned. Returns `"OK"` when nothing breaks.
#[must_use]
pub fn commentary(positions: &[HorizonPosition]) -> String {
    positions
        .iter()
        .find_map(HorizonPosition::describe_break)
        .unwrap_or_else(|| OK_COMMENTARY.to_string())
}

/// One bond's horizon summary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DashboardRow {
    /// Bond.
    pub bond: BondId,
    /// One entry per horizon, ascending.
    pub positions: Vec<HorizonPosition>,
    /// Earliest-break commentary, or `"OK"`.
    pub commentary: String,
}

impl DashboardRow {
    /// Creates a row and derives its commentary.
    #[must_use]
    pub fn new(bond: BondId, positions: Vec<HorizonPosition>) -> Self {
        let commentary = commentary(&positions);
        Self {
            bond,
            positions,
            commentary,
        }
    }

    /// Position for a horizon, if the horizon is part of this row.
    #[must_use]
    pub fn position(&self, horizon: i64) -> Option<&HorizonPosition> {
        self.positions.iter().find(|p| p.horizon == horizon)
    }

    /// Net cash in a horizon (zero if absent).
    #[must_use]
    pub fn cash(&self, horizon: i64) -> i64 {
        self.position(horizon).map_or(0, |p| p.cash)
    }

    /// Open cover in a horizon (zero if absent).
    #[must_use]
    pub fn cover(&self, horizon: i64) -> i64 {
        self.position(horizon).map_or(0, |p| p.cover)
    }

    /// Net break in a horizon (zero if absent).
    #[must_use]
    pub fn net_break(&self, horizon: i64) -> i64 {
        self.position(horizon).map_or(0, |p| p.net_break)
    }

    /// Returns true if any horizon breaks.
    #[must_use]
    pub fn has_break(&self) -> bool {
        self.positions.iter().any(|p| p.net_break != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_break() {
        assert_eq!(HorizonPosition::new(0, -10_000_000, 0).net_break, 10_000_000);
        assert_eq!(HorizonPosition::new(1, 5_000_000, 2_000_000).net_break, -2_000_000);
        assert_eq!(HorizonPosition::new(2, -3_000_000, 3_000_000).net_break, 0);
        assert_eq!(HorizonPosition::new(2, 0, 0).net_break, 0);
    }

    #[test]
    fn test_status() {
        assert_eq!(HorizonPosition::new(0, -1, 0).status(), BreakStatus::UnderCovered);
        assert_eq!(HorizonPosition::new(0, 0, 1).status(), BreakStatus::OverCovered);
        assert_eq!(HorizonPosition::new(0, 7, 0).status(), BreakStatus::Matched);
    }

    #[test]
    fn test_need_cover_message() {
        let p = HorizonPosition::new(0, -10_000_000, 0);
        assert_eq!(
            p.describe_break().unwrap(),
            "Need cover T0: missing 10000000 (short 10000000 vs cover 0)"
        );
    }

    #[test]
    fn test_close_cover_message() {
        let p = HorizonPosition::new(1, 5_000_000, 2_000_000);
        assert_eq!(
            p.describe_break().unwrap(),
            "Close cover T1: excess 2000000 (no short, cover 2000000)"
        );
    }

    #[test]
    fn test_reduce_cover_message() {
        let p = HorizonPosition::new(2, -1_000_000, 4_000_000);
        assert_eq!(
            p.describe_break().unwrap(),
            "Reduce/Close cover T2: excess 3000000 (short 1000000 vs cover 4000000)"
        );
    }

    #[test]
    fn test_commentary_first_break_only() {
        // breaks: +500000, -300000, 0
        let positions = vec![
            HorizonPosition::new(0, -500_000, 0),
            HorizonPosition::new(1, 0, 300_000),
            HorizonPosition::new(2, 0, 0),
        ];
        let text = commentary(&positions);
        assert!(text.starts_with("Need cover T0: missing 500000"));
        assert!(!text.contains("T1"));
    }

    #[test]
    fn test_commentary_skips_matched() {
        let positions = vec![
            HorizonPosition::new(0, -2_000_000, 2_000_000),
            HorizonPosition::new(1, 0, 0),
            HorizonPosition::new(2, -1_000_000, 0),
        ];
        assert_eq!(
            commentary(&positions),
            "Need cover T2: missing 1000000 (short 1000000 vs cover 0)"
        );
    }

    #[test]
    fn test_commentary_ok() {
        let positions = vec![HorizonPosition::new(0, 1_000_000, 0)];
        assert_eq!(commentary(&positions), "OK");
        assert_eq!(commentary(&[]), "OK");
    }

    #[test]
    fn test_bounds_do_not_overflow() {
        let short = HorizonPosition::new(0, i64::MIN, 0);
        assert_eq!(short.short(), i64::MAX);
        assert_eq!(short.net_break, i64::MAX);

        let over = HorizonPosition::new(1, 0, i64::MAX);
        assert_eq!(over.net_break, -i64::MAX);
        assert_eq!(
            over.describe_break().unwrap(),
            format!("Close cover T1: excess {max} (no short, cover {max})", max = i64::MAX)
        );
    }

    #[test]
    fn test_row_accessors() {
        let row = DashboardRow::new(
            BondId::from("BOND_A"),
            vec![
                HorizonPosition::new(0, 0, 0),
                HorizonPosition::new(1, 5_000_000, 2_000_000),
                HorizonPosition::new(2, 0, 0),
            ],
        );
        assert_eq!(row.cash(1), 5_000_000);
        assert_eq!(row.cover(1), 2_000_000);
        assert_eq!(row.net_break(1), -2_000_000);
        assert_eq!(row.cash(7), 0);
        assert!(row.has_break());
        assert!(row.commentary.starts_with("Close cover T1"));
    }
}
