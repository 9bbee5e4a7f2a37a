//! # Covercheck Ext File
//!
//! Flat-file storage for Covercheck postings.
//!
//! This crate provides:
//! - [`CsvPostingStore`]: two append-only CSV files (cash trades and repo
//!   covers) implementing [`PostingSource`](covercheck_core::PostingSource)
//! - [`FeedGenerator`]: a random trade feed for demos and soak runs

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod generator;
mod store;

pub use error::{StoreError, StoreResult};
pub use generator::{format_book_time, FeedGenerator, DEFAULT_BONDS, QUANTITY_CHOICES};
pub use store::{CsvPostingStore, CASH_FILE, CASH_HEADER, REPO_FILE, REPO_HEADER};
