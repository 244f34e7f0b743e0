mod dto;
mod parser;
mod types;

pub use dto::{RECORD_WIDTH, RawRecord};
pub use parser::CsvParser;
pub use types::{CsvAmount, CsvDate};
