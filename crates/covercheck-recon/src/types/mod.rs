//! Configuration types for reconciliation.
//!
//! - [`HorizonSet`]: Ordered day offsets used for dashboard bucketing
//! - [`ReconConfig`]: Run configuration

mod config;
mod horizon;

pub use config::ReconConfig;
pub use horizon::{horizon_label, HorizonSet, DEFAULT_HORIZONS};
