use std::fs;
use std::io::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::Config;
use crate::encoding::decode_export;
use crate::errors::{StatementError, StatementResult};
use crate::ofx::OfxWriter;
use crate::parsers::prelude::*;
use crate::types::{LedgerBalance, PostedDate, Statement, Transaction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileFormat {
    #[serde(rename = "csv")]
    Csv,
    #[serde(rename = "html")]
    Html,
}

impl FileFormat {
    fn parse_raw(&self, content: &str) -> StatementResult<Vec<RawRecord>> {
        match self {
            FileFormat::Csv => CsvParser::parse(content),
            FileFormat::Html => HtmlParser::parse(content),
        }
    }

    fn parse(&self, content: &str) -> StatementResult<Vec<Transaction>> {
        self.parse_raw(content)?
            .into_iter()
            .map(Transaction::try_from)
            .collect()
    }

    fn detect(filename: Option<&str>, content: Option<&str>) -> StatementResult<Self> {
        let content = content.unwrap_or("");

        // An explicit .csv name is trusted over whatever the narratives contain.
        if filename.is_some_and(|name| name.to_lowercase().ends_with(".csv")) {
            return Ok(FileFormat::Csv);
        }

        if filename.is_some() || !content.is_empty() {
            if HtmlParser::is_supported(filename, content) {
                return Ok(FileFormat::Html);
            }
            if CsvParser::is_supported(filename, content) {
                return Ok(FileFormat::Csv);
            }
        }

        Err(StatementError::UnsupportedFormat)
    }
}

/// Reads an export and normalizes it into a [`Statement`].
#[derive(Default)]
pub struct StatementBuilder {
    content: Option<String>,
    filepath: Option<String>,
    format: Option<FileFormat>,
    ledger_balance: Option<LedgerBalance>,
    as_of: Option<PostedDate>,
}

impl StatementBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    /// Raw export bytes, UTF-8 or windows-1252.
    pub fn bytes(mut self, bytes: &[u8]) -> Self {
        self.content = Some(decode_export(bytes));
        self
    }

    pub fn filename(mut self, filename: &str) -> Self {
        self.filepath = Some(filename.to_string());
        self
    }

    pub fn format(mut self, format: FileFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Closing balance to report instead of the one found in the export.
    pub fn ledger_balance(mut self, balance: LedgerBalance) -> Self {
        self.ledger_balance = Some(balance);
        self
    }

    /// Date of the zero balance reported when the export has no rows.
    pub fn as_of(mut self, date: NaiveDate) -> Self {
        self.as_of = Some(PostedDate::from(date));
        self
    }

    /// Parse and normalize every record. Fails on the first bad record.
    pub fn parse(self) -> StatementResult<Statement> {
        let content = self
            .content
            .map(Ok)
            .unwrap_or_else(|| {
                self.filepath
                    .as_deref()
                    .ok_or(StatementError::MissingContentAndFilepath)
                    .and_then(|path| fs::read(path).map_err(Into::into))
                    .map(|bytes| decode_export(&bytes))
            })?;

        let format = self
            .format
            .map(Ok)
            .unwrap_or_else(|| FileFormat::detect(self.filepath.as_deref(), Some(content.as_str())))?;

        let transactions = format.parse(&content)?;

        let ledger_balance = match (self.ledger_balance, self.as_of) {
            (Some(balance), _) => balance,
            (None, Some(as_of)) if transactions.is_empty() => LedgerBalance::zero(as_of),
            (None, _) => LedgerBalance::from_transactions(&transactions)?,
        };

        info!(
            format = ?format,
            transactions = transactions.len(),
            "normalized statement"
        );

        Ok(Statement {
            transactions,
            ledger_balance,
        })
    }
}

/// Run the whole conversion and write the OFX document to `out`.
///
/// Nothing is written unless every record normalizes cleanly. An export with
/// no rows gets a zero balance as of `today`.
pub fn convert<W: Write>(
    config: &Config,
    builder: StatementBuilder,
    today: NaiveDate,
    out: &mut W,
) -> StatementResult<Statement> {
    let statement = builder.as_of(today).parse()?;
    OfxWriter::new(config).write_to(&statement, today, out)?;
    Ok(statement)
}
