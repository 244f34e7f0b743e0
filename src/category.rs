use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{StatementError, StatementResult};

/// OFX `TRNTYPE` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionCategory {
    Credit,
    Debit,
    Int,
    Div,
    Fee,
    SrvChg,
    Dep,
    Atm,
    Pos,
    Xfer,
    Check,
    Payment,
    Cash,
    DirectDep,
    DirectDebit,
    RepeatPmt,
    Other,
}

/// Bank transaction type codes and the OFX category each one stands for.
///
/// The numeric codes are what older exports carried in the same column.
const CATEGORY_MAP: &[(&str, TransactionCategory)] = &[
    ("TRANSFER", TransactionCategory::Credit),
    ("BULK", TransactionCategory::Debit),
    ("CHECK", TransactionCategory::Check),
    ("CREDIT", TransactionCategory::Credit),
    ("TT", TransactionCategory::Int),
    ("DEPOSIT", TransactionCategory::Dep),
    ("CHARGES", TransactionCategory::SrvChg),
    ("524", TransactionCategory::Xfer),
    ("540", TransactionCategory::Int),
    ("900", TransactionCategory::Check),
    ("945", TransactionCategory::Pos),
    ("962", TransactionCategory::DirectDebit),
    ("963", TransactionCategory::Xfer),
    ("973", TransactionCategory::SrvChg),
    ("998", TransactionCategory::Payment),
];

impl TransactionCategory {
    /// Map a bank transaction type code. There is no fallback: an unmapped
    /// code fails with [`StatementError::UnknownCategory`].
    pub fn from_bank_code(code: &str, line: u64) -> StatementResult<Self> {
        let code = code.trim();
        CATEGORY_MAP
            .iter()
            .find(|(bank_code, _)| *bank_code == code)
            .map(|(_, category)| *category)
            .ok_or_else(|| StatementError::UnknownCategory {
                line,
                code: code.to_string(),
            })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionCategory::Credit => "CREDIT",
            TransactionCategory::Debit => "DEBIT",
            TransactionCategory::Int => "INT",
            TransactionCategory::Div => "DIV",
            TransactionCategory::Fee => "FEE",
            TransactionCategory::SrvChg => "SRVCHG",
            TransactionCategory::Dep => "DEP",
            TransactionCategory::Atm => "ATM",
            TransactionCategory::Pos => "POS",
            TransactionCategory::Xfer => "XFER",
            TransactionCategory::Check => "CHECK",
            TransactionCategory::Payment => "PAYMENT",
            TransactionCategory::Cash => "CASH",
            TransactionCategory::DirectDep => "DIRECTDEP",
            TransactionCategory::DirectDebit => "DIRECTDEBIT",
            TransactionCategory::RepeatPmt => "REPEATPMT",
            TransactionCategory::Other => "OTHER",
        }
    }
}

impl fmt::Display for TransactionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
