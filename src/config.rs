use serde::{Deserialize, Serialize};

use crate::errors::{StatementError, StatementResult};

/// Account identity written into `BANKACCTFROM`.
///
/// The bank and account ids are baked in when the binary is built:
///
/// ```sh
/// BANK2OFX_BANK_ID=021001088 BANK2OFX_ACCOUNT_ID=123456789 cargo build --release
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub bank_id: String,
    pub account_id: String,
    pub currency: String,
    pub account_type: String,
}

impl Config {
    pub const DEFAULT_CURRENCY: &'static str = "USD";
    pub const DEFAULT_ACCOUNT_TYPE: &'static str = "CHECKING";

    pub fn new(bank_id: Option<&str>, account_id: Option<&str>) -> StatementResult<Self> {
        Ok(Config {
            bank_id: required("bank id", bank_id)?,
            account_id: required("account id", account_id)?,
            currency: Self::DEFAULT_CURRENCY.to_string(),
            account_type: Self::DEFAULT_ACCOUNT_TYPE.to_string(),
        })
    }

    /// Identity constants captured at compile time.
    pub fn from_build_env() -> StatementResult<Self> {
        Self::new(
            option_env!("BANK2OFX_BANK_ID"),
            option_env!("BANK2OFX_ACCOUNT_ID"),
        )
    }

    pub fn currency(mut self, currency: &str) -> Self {
        self.currency = currency.trim().to_string();
        self
    }

    pub fn account_type(mut self, account_type: &str) -> Self {
        self.account_type = account_type.trim().to_string();
        self
    }
}

fn required(name: &str, value: Option<&str>) -> StatementResult<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| StatementError::Configuration(format!("{name} is not set")))
}
