use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{StatementError, StatementResult};
use crate::types::PostedDate;

/// An amount column as exported by the bank, e.g. `"1,234.56"` or `""`.
///
/// The bank writes a comma as thousands separator and leaves the column
/// empty when it does not apply, so an empty value means "absent", not zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvAmount(String);

impl CsvAmount {
    pub fn is_present(&self) -> bool {
        !self.0.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the amount, `Ok(None)` when the column is empty.
    pub fn parse(&self, line: u64) -> StatementResult<Option<Decimal>> {
        if !self.is_present() {
            return Ok(None);
        }

        let cleaned: String = self.0.trim().chars().filter(|c| *c != ',').collect();
        Decimal::from_str(&cleaned)
            .map(Some)
            .map_err(|_| StatementError::InvalidAmount {
                line,
                value: self.0.clone(),
            })
    }
}

impl From<String> for CsvAmount {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CsvAmount {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A `DD/MM/YYYY` date column.
///
/// Components are only checked to be numbers; `32/13/2020` goes through
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvDate(String);

impl CsvDate {
    pub fn parse(&self, line: u64) -> StatementResult<PostedDate> {
        let invalid = || StatementError::InvalidDate {
            line,
            value: self.0.clone(),
        };

        let parts: Vec<&str> = self.0.trim().split('/').map(str::trim).collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(invalid());
        };

        let component = |s: &str| s.parse::<u32>().map_err(|_| invalid());

        Ok(PostedDate {
            year: component(*year)?,
            month: component(*month)?,
            day: component(*day)?,
        })
    }
}

impl From<String> for CsvDate {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CsvDate {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1,234.56", "1234.56")]
    #[case("1234.56", "1234.56")]
    #[case("1,000,000.00", "1000000.00")]
    #[case("0.01", "0.01")]
    #[case("-45.10", "-45.10")]
    #[case("  12.00 ", "12.00")]
    #[case("7", "7")]
    fn test_amount_valid(#[case] input: &str, #[case] expected: &str) {
        let result = CsvAmount::from(input).parse(1);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), Some(Decimal::from_str(expected).unwrap()));
    }

    #[test]
    fn test_amount_clean_input_is_unchanged() {
        let once = CsvAmount::from("1234.56").parse(1).unwrap().unwrap();
        let twice = CsvAmount::from(once.to_string()).parse(1).unwrap().unwrap();
        assert_eq!(once, twice);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_amount_empty_is_absent(#[case] input: &str) {
        let amount = CsvAmount::from(input);
        assert!(!amount.is_present());
        assert_eq!(amount.parse(1).unwrap(), None);
    }

    #[rstest]
    #[case("abc")]
    #[case("$100.00")]
    #[case("1.2.3")]
    #[case("12,34x")]
    fn test_amount_invalid(#[case] input: &str) {
        let result = CsvAmount::from(input).parse(9);
        assert!(matches!(
            result,
            Err(StatementError::InvalidAmount { line: 9, ref value }) if value == input
        ));
    }

    #[rstest]
    #[case("01/03/2020", 2020, 3, 1)]
    #[case("31/12/2025", 2025, 12, 31)]
    #[case("1/2/2021", 2021, 2, 1)]
    #[case(" 26/12/2025 ", 2025, 12, 26)]
    #[case("32/13/2020", 2020, 13, 32)] // no calendar validation
    fn test_date_valid(
        #[case] input: &str,
        #[case] year: u32,
        #[case] month: u32,
        #[case] day: u32,
    ) {
        let result = CsvDate::from(input).parse(1);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), PostedDate { year, month, day });
    }

    #[rstest]
    #[case("")]
    #[case("2020-03-01")]
    #[case("01/03")]
    #[case("01/03/2020/1")]
    #[case("aa/03/2020")]
    #[case("-1/03/2020")]
    fn test_date_invalid(#[case] input: &str) {
        let result = CsvDate::from(input).parse(3);
        assert!(matches!(result, Err(StatementError::InvalidDate { line: 3, .. })));
    }

    #[test]
    fn test_date_serialization() {
        let date = CsvDate::from("01/03/2020");
        let json = serde_json::to_string(&date).unwrap();
        assert!(json.contains("01/03/2020"));

        let deserialized: CsvDate = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, date);
    }
}
