//! Record Readers: turn an export file into ordered [`RawRecord`]s.

pub mod csv;
pub mod html;
pub mod traits;

pub mod prelude {
    pub use super::csv::{CsvAmount, CsvDate, CsvParser, RawRecord, RECORD_WIDTH};
    pub use super::html::HtmlParser;
    pub use super::traits::Parser;
}
