//! CSV-backed posting store.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use covercheck_core::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};

/// File name for cash trades inside a data directory.
pub const CASH_FILE: &str = "cash_trades.csv";

/// File name for repo covers inside a data directory.
pub const REPO_FILE: &str = "repo_trades.csv";

/// Header row of the cash trade file.
pub const CASH_HEADER: [&str; 6] = ["trade_id", "book_time", "settle_date", "bond", "side", "qty"];

/// Header row of the repo cover file.
pub const REPO_HEADER: [&str; 6] = [
    "repo_id",
    "book_time",
    "settle_date",
    "bond",
    "cover_qty",
    "status",
];

// =============================================================================
// CSV POSTING STORE
// =============================================================================

/// Two append-only CSV files holding the cash and repo legs.
///
/// A missing file reads as an empty book. Every load re-reads both files in
/// full so callers always see a complete snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvPostingStore {
    cash_path: PathBuf,
    repo_path: PathBuf,
}

impl CsvPostingStore {
    /// Creates a store over explicit file paths.
    pub fn new(cash_path: impl AsRef<Path>, repo_path: impl AsRef<Path>) -> Self {
        Self {
            cash_path: cash_path.as_ref().to_path_buf(),
            repo_path: repo_path.as_ref().to_path_buf(),
        }
    }

    /// Creates a store over the standard file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(CASH_FILE), dir.join(REPO_FILE))
    }

    /// Path of the cash trade file.
    pub fn cash_path(&self) -> &Path {
        &self.cash_path
    }

    /// Path of the repo cover file.
    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    /// Creates both files with only their header rows.
    ///
    /// Existing files are truncated. Parent directories are created.
    pub fn init(&self) -> StoreResult<()> {
        write_header(&self.cash_path, &CASH_HEADER)?;
        write_header(&self.repo_path, &REPO_HEADER)?;
        info!(
            cash = %self.cash_path.display(),
            repo = %self.repo_path.display(),
            "Initialized posting files"
        );
        Ok(())
    }

    /// Reads every cash row.
    pub fn load_cash_records(&self) -> StoreResult<Vec<CashRecord>> {
        read_records(&self.cash_path)
    }

    /// Reads every repo cover row.
    pub fn load_cover_records(&self) -> StoreResult<Vec<CoverRecord>> {
        read_records(&self.repo_path)
    }

    /// Appends cash rows, writing the header first if the file is new.
    pub fn append_cash(&self, records: &[CashRecord]) -> StoreResult<()> {
        append_records(&self.cash_path, &CASH_HEADER, records)
    }

    /// Appends repo cover rows, writing the header first if the file is new.
    pub fn append_covers(&self, records: &[CoverRecord]) -> StoreResult<()> {
        append_records(&self.repo_path, &REPO_HEADER, records)
    }

    /// Number of rows already in each file, as `(cash, covers)`.
    pub fn row_counts(&self) -> StoreResult<(usize, usize)> {
        Ok((
            self.load_cash_records()?.len(),
            self.load_cover_records()?.len(),
        ))
    }
}

impl PostingSource for CsvPostingStore {
    type Error = StoreError;

    fn load_snapshot(&self) -> Result<Snapshot, Self::Error> {
        let cash = self.load_cash_records()?;
        let covers = self.load_cover_records()?;
        let snapshot = Snapshot::from_records(&cash, &covers)?;
        debug!(
            cash = snapshot.cash.len(),
            covers = snapshot.covers.len(),
            "Loaded posting snapshot"
        );
        Ok(snapshot)
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn ensure_parent(path: &Path) -> StoreResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))
        }
        _ => Ok(()),
    }
}

fn write_header(path: &Path, header: &[&str]) -> StoreResult<()> {
    ensure_parent(path)?;
    let mut writer = csv::Writer::from_path(path).map_err(|e| StoreError::csv(path, e))?;
    writer
        .write_record(header)
        .map_err(|e| StoreError::csv(path, e))?;
    writer.flush().map_err(|e| StoreError::io(path, e))
}

fn read_records<T: DeserializeOwned>(path: &Path) -> StoreResult<Vec<T>> {
    if !path.exists() {
        debug!(path = %path.display(), "Posting file missing, treating as empty");
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| StoreError::csv(path, e))?;

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: T = result.map_err(|e| StoreError::csv(path, e))?;
        records.push(record);
    }
    Ok(records)
}

fn append_records<T: Serialize>(path: &Path, header: &[&str], records: &[T]) -> StoreResult<()> {
    ensure_parent(path)?;
    let needs_header = fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);

    let file: File = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| StoreError::io(path, e))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if needs_header {
        writer
            .write_record(header)
            .map_err(|e| StoreError::csv(path, e))?;
    }
    for record in records {
        writer
            .serialize(record)
            .map_err(|e| StoreError::csv(path, e))?;
    }
    writer.flush().map_err(|e| StoreError::io(path, e))?;

    debug!(path = %path.display(), rows = records.len(), "Appended rows");
    Ok(())
}
