//! HSBCnet's "Excel" download is an HTML table rather than a spreadsheet.
//! Rows are pulled out of the first `<table>` and fed through the same
//! record shape as the CSV export.

use std::sync::LazyLock;

use csv::StringRecord;
use regex::Regex;
use tracing::debug;

use crate::errors::{StatementError, StatementResult};
use crate::parsers::csv::RawRecord;
use crate::parsers::traits::Parser;

static TABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<table[^>]*>(.*?)</table[^>]*>").expect("valid regex"));
static ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<tr[^>]*>(.*?)</tr[^>]*>").expect("valid regex"));
static CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<td[^>]*>(.*?)</td[^>]*>").expect("valid regex"));
static SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<span[^>]*>(.*?)</span[^>]*>").expect("valid regex"));

const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    // last, so "&amp;lt;" decodes to "&lt;" and not "<"
    ("&amp;", "&"),
];

pub struct HtmlParser;

impl Parser for HtmlParser {
    type Output = RawRecord;

    fn is_supported(filename: Option<&str>, content: &str) -> bool {
        if let Some(name) = filename {
            let name = name.to_lowercase();
            if name.ends_with(".html") || name.ends_with(".htm") || name.ends_with(".xls") {
                return true;
            }
        }

        content.to_lowercase().contains("<table")
    }

    fn parse(content: &str) -> StatementResult<Vec<Self::Output>> {
        let table = TABLE
            .captures(content)
            .and_then(|c| c.get(1))
            .ok_or_else(|| StatementError::MalformedHtml("missing <table> element".to_string()))?;

        let mut records = Vec::new();

        // Row numbers are 1-based like CSV lines; row 1 is the header.
        for (index, row) in ROW.captures_iter(table.as_str()).enumerate().skip(1) {
            let row_html = row.get(1).map(|m| m.as_str()).unwrap_or_default();
            let cells: Vec<String> = CELL
                .captures_iter(row_html)
                .map(|cell| cell_text(cell.get(1).map(|m| m.as_str()).unwrap_or_default()))
                .collect();

            let line = index as u64 + 1;
            records.push(RawRecord::from_record(&StringRecord::from(cells), line)?);
        }

        debug!(count = records.len(), "read HTML table rows");
        Ok(records)
    }
}

fn cell_text(cell: &str) -> String {
    let inner = SPAN
        .captures(cell)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .unwrap_or(cell);

    decode_entities(inner.trim())
}

fn decode_entities(text: &str) -> String {
    ENTITIES
        .iter()
        .fold(text.to_string(), |acc, (entity, plain)| acc.replace(entity, plain))
}
