//! Convert HSBCnet transaction exports into OFX bank statements.
//!
//! ```rust,ignore
//! use bank2ofx::{Config, StatementBuilder, convert};
//!
//! let config = Config::new(Some("021001088"), Some("123456789"))?;
//! let builder = StatementBuilder::new().filename("export.csv");
//! convert(&config, builder, chrono::Utc::now().date_naive(), &mut std::io::stdout())?;
//! ```

mod builder;
mod types;

pub mod category;
pub mod config;
pub mod encoding;
pub mod errors;
pub mod narrative;
pub mod ofx;
pub mod parsers;

pub use builder::{FileFormat, StatementBuilder, convert};
pub use category::TransactionCategory;
pub use config::Config;
pub use errors::{StatementError, StatementResult};
pub use ofx::OfxWriter;
pub use parsers::prelude::*;
pub use types::{LedgerBalance, PostedDate, Statement, Transaction, fit_id, format_amount};
