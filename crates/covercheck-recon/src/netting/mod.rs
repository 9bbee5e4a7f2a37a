//! Netting and classification engine.
//!
//! Nets signed cash against open repo cover for each bond and exact
//! settlement date, then classifies the remediation:
//!
//! ```text
//! short_needed = max(-net_cash, 0)
//! short_needed > open_cover  -> NEW_COVER_NEEDED (short_needed - open_cover)
//! open_cover > short_needed  -> CLOSE_COVER      (open_cover - short_needed)
//! otherwise                  -> NO_ACTION        (0)
//! ```

mod action;
mod engine;

pub use action::*;
pub use engine::*;
