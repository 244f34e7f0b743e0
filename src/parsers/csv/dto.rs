use csv::StringRecord;
use serde::{Deserialize, Serialize};

use crate::errors::{StatementError, StatementResult};

/// Number of columns in an HSBCnet transaction export.
pub const RECORD_WIDTH: usize = 15;

/// One row of the export, fields kept as the bank wrote them.
///
/// Columns are positional; the header row is never used to locate them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(skip)]
    pub line: u64,
    pub account_name: String,
    pub account_number: String,
    pub bank_name: String,
    pub currency: String,
    pub country: String,
    pub account_status: String,
    pub account_type: String,
    pub bank_reference: String,
    pub narrative: String,
    pub customer_reference: String,
    pub trn_type: String,
    pub credit: String,
    pub debit: String,
    pub balance: String,
    pub date: String,
}

impl RawRecord {
    /// Build a record from one row, rejecting rows of the wrong width.
    pub fn from_record(record: &StringRecord, line: u64) -> StatementResult<Self> {
        if record.len() != RECORD_WIDTH {
            return Err(StatementError::MalformedInput {
                line,
                expected: RECORD_WIDTH,
                found: record.len(),
            });
        }

        let mut raw: RawRecord = record.deserialize(None)?;
        raw.line = line;
        Ok(raw)
    }
}
