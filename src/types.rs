use std::fmt;

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::category::TransactionCategory;
use crate::errors::{StatementError, StatementResult};
use crate::narrative;
use crate::parsers::prelude::*;

/// A posting date as written by the bank.
///
/// Kept as plain integers: the export is trusted, so a day of 32 or a month
/// of 13 is carried through to the output unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PostedDate {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

impl PostedDate {
    pub const EPOCH: PostedDate = PostedDate {
        year: 1970,
        month: 1,
        day: 1,
    };
}

impl From<NaiveDate> for PostedDate {
    fn from(date: NaiveDate) -> Self {
        PostedDate {
            year: date.year().max(0) as u32,
            month: date.month(),
            day: date.day(),
        }
    }
}

/// `YYYYMMDD`, zero padded.
impl fmt::Display for PostedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}{:02}", self.year, self.month, self.day)
    }
}

/// Format an amount with exactly two decimals, rounding half away from zero.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// Duplicate-detection id for the consumer: posting date followed by the
/// absolute amount.
///
/// Two transactions on the same day for the same absolute amount get the
/// same id.
pub fn fit_id(posted: PostedDate, amount: Decimal) -> String {
    format!("{}{}", posted, format_amount(amount.abs()))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub category: TransactionCategory,
    /// Positive for credits, negative for debits
    pub amount: Decimal,
    pub posted: PostedDate,
    pub name: String,
    pub memo: String,
    pub fit_id: String,
    /// Running balance after this transaction, when the bank reported one
    pub balance: Option<Decimal>,
    pub currency: String,
}

impl TryFrom<RawRecord> for Transaction {
    type Error = StatementError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let line = raw.line;

        let category = TransactionCategory::from_bank_code(&raw.trn_type, line)?;
        let posted = CsvDate::from(raw.date).parse(line)?;

        let credit = CsvAmount::from(raw.credit);
        let debit = CsvAmount::from(raw.debit);
        let amount = match (credit.parse(line)?, debit.parse(line)?) {
            (Some(credit), None) => credit,
            (None, Some(debit)) => -debit.abs(),
            _ => {
                return Err(StatementError::AmbiguousAmount {
                    line,
                    credit: credit.as_str().to_string(),
                    debit: debit.as_str().to_string(),
                });
            }
        };

        let balance = CsvAmount::from(raw.balance).parse(line)?;

        let transaction = Transaction {
            category,
            amount,
            posted,
            name: narrative::display_name(&raw.narrative),
            memo: narrative::memo(&raw.narrative),
            fit_id: fit_id(posted, amount),
            balance,
            currency: raw.currency.trim().to_string(),
        };

        debug!(
            line,
            category = %transaction.category,
            amount = %transaction.amount,
            fit_id = %transaction.fit_id,
            "normalized record"
        );

        Ok(transaction)
    }
}

/// Closing balance reported in `LEDGERBAL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerBalance {
    pub amount: Decimal,
    pub as_of: PostedDate,
}

impl LedgerBalance {
    /// Balance of the most recently posted transaction that carries one.
    ///
    /// Exports list several rows per day, newest first, so on a date tie the
    /// earliest row in input order wins.
    pub fn from_transactions(transactions: &[Transaction]) -> StatementResult<Self> {
        let mut latest: Option<LedgerBalance> = None;

        for txn in transactions {
            let Some(amount) = txn.balance else {
                continue;
            };
            if latest.is_none_or(|current| txn.posted > current.as_of) {
                latest = Some(LedgerBalance {
                    amount,
                    as_of: txn.posted,
                });
            }
        }

        latest.ok_or(StatementError::MissingLedgerBalance)
    }

    /// Balance for an export with no rows at all.
    pub fn zero(as_of: PostedDate) -> Self {
        LedgerBalance {
            amount: Decimal::ZERO,
            as_of,
        }
    }
}

/// Everything the OFX writer needs besides the account configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub transactions: Vec<Transaction>,
    pub ledger_balance: LedgerBalance,
}
