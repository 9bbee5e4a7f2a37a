//! # Covercheck Core
//!
//! Core types, errors, and the store contract for the Covercheck repo cover
//! reconciler.
//!
//! - **Types**: `Date`, `BondId`, `Side`, `CoverStatus`, cash and cover postings
//! - **Records**: Text-typed stored rows and their validation into postings
//! - **Snapshot**: Both posting streams at one moment
//! - **Traits**: [`PostingSource`](traits::PostingSource), the narrow store contract
//!
//! ## Example
//!
//! ```rust
//! use covercheck_core::prelude::*;
//!
//! let settle = Date::parse("2025-06-16").unwrap();
//! let sale = CashPosting::sell("BOND_B", settle, 10_000_000);
//! assert_eq!(sale.signed_quantity(), -10_000_000);
//!
//! let cover = CoverPosting::open("BOND_B", settle, 4_000_000);
//! assert!(cover.is_open());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod traits;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CovercheckError, CovercheckResult};
    pub use crate::traits::PostingSource;
    pub use crate::types::{
        parse_as_of, BondId, CashPosting, CashRecord, CoverPosting, CoverRecord, CoverStatus, Date,
        Side, Snapshot,
    };
}

// Re-export commonly used types at crate root
pub use error::{CovercheckError, CovercheckResult};
pub use traits::PostingSource;
pub use types::{BondId, CashPosting, CoverPosting, Date, Snapshot};
