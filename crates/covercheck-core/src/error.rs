//! Error types for Covercheck.
//!
//! Every validation failure in the reconciliation pipeline surfaces as a
//! [`CovercheckError`]. There is no partial-result path: an error aborts the
//! invocation that raised it.

use thiserror::Error;

/// A specialized Result type for Covercheck operations.
pub type CovercheckResult<T> = Result<T, CovercheckError>;

/// The main error type for Covercheck operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CovercheckError {
    /// A stored record failed validation (bad quantity, date, side, or status).
    #[error("Malformed record '{record}': field '{field}' has invalid value '{value}' ({reason})")]
    MalformedRecord {
        /// Record identifier (trade or repo id), or `<unknown>` if absent.
        record: String,
        /// Name of the offending field.
        field: String,
        /// The raw value as read.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The as-of date supplied by the caller could not be parsed.
    #[error("Invalid as-of date '{input}'. Use YYYY-MM-DD.")]
    InvalidAsOf {
        /// The raw input.
        input: String,
    },

    /// Error in date construction or parsing.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// The horizon set is unusable.
    #[error("Invalid horizons: {reason}")]
    InvalidHorizons {
        /// Description of what's invalid.
        reason: String,
    },
}

impl CovercheckError {
    /// Creates a malformed record error.
    #[must_use]
    pub fn malformed_record(
        record: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedRecord {
            record: record.into(),
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid as-of error.
    #[must_use]
    pub fn invalid_as_of(input: impl Into<String>) -> Self {
        Self::InvalidAsOf {
            input: input.into(),
        }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid horizons error.
    #[must_use]
    pub fn invalid_horizons(reason: impl Into<String>) -> Self {
        Self::InvalidHorizons {
            reason: reason.into(),
        }
    }

    /// Returns true if this error came from bad stored data.
    #[must_use]
    pub fn is_data_error(&self) -> bool {
        matches!(self, Self::MalformedRecord { .. })
    }
}
