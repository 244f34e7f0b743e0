use thiserror::Error;

/// Errors raised while converting a bank export into an OFX statement.
///
/// Every variant is fatal for the run: nothing is written to the output
/// sink once one of these has been produced.
#[derive(Error, Debug)]
pub enum StatementError {
    /// A required identity constant (bank id, account id) is missing
    #[error("Missing configuration: {0}")]
    Configuration(String),

    /// A row does not have the expected number of fields
    #[error("Malformed input on line {line}: expected {expected} fields, found {found}")]
    MalformedInput {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// Both or neither of the credit and debit columns are filled in
    #[error("Ambiguous amount on line {line}: credit '{credit}', debit '{debit}'")]
    AmbiguousAmount {
        line: u64,
        credit: String,
        debit: String,
    },

    /// The bank transaction type has no OFX counterpart
    #[error("Unknown transaction type on line {line}: '{code}'")]
    UnknownCategory { line: u64, code: String },

    #[error("Invalid amount on line {line}: '{value}'")]
    InvalidAmount { line: u64, value: String },

    /// Dates must be DD/MM/YYYY with numeric components
    #[error("Invalid date on line {line}: '{value}'")]
    InvalidDate { line: u64, value: String },

    #[error("Failed to read CSV record: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed HTML export: {0}")]
    MalformedHtml(String),

    /// Neither the file name nor the content matches a known export format
    #[error("Unsupported file format")]
    UnsupportedFormat,

    #[error("Failed to read file content: {0}")]
    ReadContentFailed(#[from] std::io::Error),

    /// The builder was called without content or a file path
    #[error("Content or filepath is required")]
    MissingContentAndFilepath,

    /// No record carries a balance and none was supplied by the caller
    #[error("No ledger balance found in the input")]
    MissingLedgerBalance,

    #[error("Failed to write output: {0}")]
    WriteOutput(std::io::Error),
}

impl StatementError {
    /// Input line the error refers to, when there is one.
    pub fn line(&self) -> Option<u64> {
        match self {
            StatementError::MalformedInput { line, .. }
            | StatementError::AmbiguousAmount { line, .. }
            | StatementError::UnknownCategory { line, .. }
            | StatementError::InvalidAmount { line, .. }
            | StatementError::InvalidDate { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Convenience alias for results carrying [`StatementError`]
pub type StatementResult<T> = Result<T, StatementError>;
