//! Read-back shapes for checking rendered documents in tests.

use serde::Deserialize;

/// The part of a rendered document starting at `<OFX>`.
pub(crate) fn body(document: &str) -> &str {
    let start = document.find("<OFX>").unwrap_or(0);
    &document[start..]
}

#[derive(Debug, Deserialize)]
pub(crate) struct OfxDocument {
    #[serde(rename = "BANKMSGSRSV1")]
    pub(crate) bank_msgs: BankMessages,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BankMessages {
    #[serde(rename = "STMTTRNRS")]
    pub(crate) stmt_trn_rs: StatementTransactionResponse,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatementTransactionResponse {
    #[serde(rename = "STMTRS")]
    pub(crate) stmt_rs: StatementResponse,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatementResponse {
    #[serde(rename = "CURDEF")]
    pub(crate) currency: String,
    #[serde(rename = "BANKACCTFROM")]
    pub(crate) account: AccountFrom,
    #[serde(rename = "BANKTRANLIST")]
    pub(crate) transaction_list: TransactionList,
    #[serde(rename = "LEDGERBAL")]
    pub(crate) ledger_balance: LedgerBalanceElement,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AccountFrom {
    #[serde(rename = "BANKID")]
    pub(crate) bank_id: String,
    #[serde(rename = "ACCTID")]
    pub(crate) account_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TransactionList {
    #[serde(rename = "DTSTART")]
    pub(crate) start: String,
    #[serde(rename = "DTEND")]
    pub(crate) end: String,
    #[serde(rename = "STMTTRN", default)]
    pub(crate) transactions: Vec<TransactionElement>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TransactionElement {
    #[serde(rename = "TRNTYPE")]
    pub(crate) trn_type: String,
    #[serde(rename = "DTPOSTED")]
    pub(crate) posted: String,
    #[serde(rename = "TRNAMT")]
    pub(crate) amount: String,
    #[serde(rename = "FITID")]
    pub(crate) fitid: String,
    #[serde(rename = "NAME", default)]
    pub(crate) name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LedgerBalanceElement {
    #[serde(rename = "BALAMT")]
    pub(crate) amount: String,
    #[serde(rename = "DTASOF")]
    pub(crate) as_of: String,
}
