use super::dto::RawRecord;
use crate::errors::StatementResult;
use crate::parsers::traits::Parser;
use csv::ReaderBuilder;
use tracing::debug;

pub struct CsvParser;

impl Parser for CsvParser {
    type Output = RawRecord;

    fn is_supported(filename: Option<&str>, content: &str) -> bool {
        let has_csv_extension = filename
            .map(|name| name.to_lowercase().ends_with(".csv"))
            .unwrap_or(false);

        let first_line = content.lines().next().unwrap_or("");
        has_csv_extension || first_line.contains(',')
    }

    fn parse(content: &str) -> StatementResult<Vec<Self::Output>> {
        // Width is checked per row so the error can name the offending line.
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut records = Vec::new();

        for result in reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            records.push(RawRecord::from_record(&record, line)?);
        }

        debug!(count = records.len(), "read CSV records");
        Ok(records)
    }
}
