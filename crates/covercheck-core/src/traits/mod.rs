//! Core traits for Covercheck.
//!
//! - [`PostingSource`]: Narrow contract for anything that can hand over a
//!   full [`Snapshot`] of cash and cover postings

use std::convert::Infallible;

use crate::types::Snapshot;

/// A store that can produce a consistent snapshot of both posting streams.
///
/// Reconciliation never reads storage itself; callers obtain a snapshot from
/// a source and pass it in. Implementations are responsible for returning a
/// snapshot that is internally consistent.
pub trait PostingSource {
    /// Error raised while loading.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Loads every current cash and cover posting.
    fn load_snapshot(&self) -> Result<Snapshot, Self::Error>;
}

/// An in-memory snapshot is its own source.
impl PostingSource for Snapshot {
    type Error = Infallible;

    fn load_snapshot(&self) -> Result<Snapshot, Self::Error> {
        Ok(self.clone())
    }
}

impl<S: PostingSource + ?Sized> PostingSource for &S {
    type Error = S::Error;

    fn load_snapshot(&self) -> Result<Snapshot, Self::Error> {
        (**self).load_snapshot()
    }
}
