//! Raw stored records and their validation into postings.
//!
//! Records are the text-typed rows a store hands over. Converting them to
//! [`CashPosting`] / [`CoverPosting`] is the only place `MalformedRecord`
//! is raised.

use serde::{Deserialize, Serialize};

use super::{BondId, CashPosting, CoverPosting, CoverStatus, Date, Side, MAX_QUANTITY};
use crate::error::{CovercheckError, CovercheckResult};

const UNKNOWN_ID: &str = "<unknown>";

/// A cash trade row as stored.
///
/// Column names match the `cash_trades.csv` layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashRecord {
    /// Trade identifier, e.g. `T000001`.
    #[serde(default)]
    pub trade_id: String,
    /// Booking timestamp (UTC).
    #[serde(default)]
    pub book_time: String,
    /// Settlement date, `YYYY-MM-DD`.
    pub settle_date: String,
    /// Bond identifier.
    pub bond: String,
    /// `BUY` or `SELL`.
    pub side: String,
    /// Quantity as an integer string.
    pub qty: String,
}

/// A repo cover row as stored.
///
/// Column names match the `repo_trades.csv` layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverRecord {
    /// Repo identifier, e.g. `R000001`.
    #[serde(default)]
    pub repo_id: String,
    /// Booking timestamp (UTC).
    #[serde(default)]
    pub book_time: String,
    /// Settlement date, `YYYY-MM-DD`.
    pub settle_date: String,
    /// Bond identifier.
    pub bond: String,
    /// Cover quantity as an integer string.
    pub cover_qty: String,
    /// `OPEN` or `CLOSED`.
    pub status: String,
}

fn record_label(id: &str) -> &str {
    if id.trim().is_empty() {
        UNKNOWN_ID
    } else {
        id
    }
}

fn parse_bond(id: &str, raw: &str) -> CovercheckResult<BondId> {
    let bond = raw.trim();
    if bond.is_empty() {
        return Err(CovercheckError::malformed_record(
            record_label(id),
            "bond",
            raw,
            "empty bond identifier",
        ));
    }
    Ok(BondId::new(bond))
}

fn parse_settle_date(id: &str, raw: &str) -> CovercheckResult<Date> {
    Date::parse(raw).map_err(|_| {
        CovercheckError::malformed_record(
            record_label(id),
            "settle_date",
            raw,
            "not a valid YYYY-MM-DD calendar date",
        )
    })
}

fn parse_quantity(id: &str, field: &str, raw: &str) -> CovercheckResult<u64> {
    let trimmed = raw.trim();
    if trimmed.starts_with('-') && trimmed[1..].parse::<u64>().is_ok() {
        return Err(CovercheckError::malformed_record(
            record_label(id),
            field,
            raw,
            "quantity must be non-negative",
        ));
    }
    let quantity = trimmed.parse::<u64>().map_err(|_| {
        CovercheckError::malformed_record(record_label(id), field, raw, "not an integer")
    })?;
    if quantity > MAX_QUANTITY {
        return Err(CovercheckError::malformed_record(
            record_label(id),
            field,
            raw,
            "quantity out of range",
        ));
    }
    Ok(quantity)
}

impl CashRecord {
    /// Validates this row into a [`CashPosting`].
    ///
    /// # Errors
    ///
    /// Returns `CovercheckError::MalformedRecord` naming the first bad field.
    pub fn to_posting(&self) -> CovercheckResult<CashPosting> {
        let id = self.trade_id.as_str();
        let bond = parse_bond(id, &self.bond)?;
        let settlement_date = parse_settle_date(id, &self.settle_date)?;
        let side = Side::from_code(&self.side).ok_or_else(|| {
            CovercheckError::malformed_record(
                record_label(id),
                "side",
                &self.side,
                "expected BUY or SELL",
            )
        })?;
        let quantity = parse_quantity(id, "qty", &self.qty)?;
        Ok(CashPosting::new(bond, settlement_date, side, quantity))
    }
}

impl CoverRecord {
    /// Validates this row into a [`CoverPosting`].
    ///
    /// Closed covers validate like open ones; they are filtered later.
    ///
    /// # Errors
    ///
    /// Returns `CovercheckError::MalformedRecord` naming the first bad field.
    pub fn to_posting(&self) -> CovercheckResult<CoverPosting> {
        let id = self.repo_id.as_str();
        let bond = parse_bond(id, &self.bond)?;
        let settlement_date = parse_settle_date(id, &self.settle_date)?;
        let quantity = parse_quantity(id, "cover_qty", &self.cover_qty)?;
        let status = CoverStatus::from_code(&self.status).ok_or_else(|| {
            CovercheckError::malformed_record(
                record_label(id),
                "status",
                &self.status,
                "expected OPEN or CLOSED",
            )
        })?;
        Ok(CoverPosting::new(bond, settlement_date, quantity, status))
    }
}

impl TryFrom<&CashRecord> for CashPosting {
    type Error = CovercheckError;

    fn try_from(record: &CashRecord) -> Result<Self, Self::Error> {
        record.to_posting()
    }
}

impl TryFrom<&CoverRecord> for CoverPosting {
    type Error = CovercheckError;

    fn try_from(record: &CoverRecord) -> Result<Self, Self::Error> {
        record.to_posting()
    }
}
