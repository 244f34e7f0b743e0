use std::io::Write;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::config::Config;
use crate::encoding::encode_document;
use crate::errors::{StatementError, StatementResult};
use crate::types::{PostedDate, Statement, Transaction, format_amount};

/// SGML header block that precedes `<OFX>`.
pub const OFX_HEADER: &[&str] = &[
    "OFXHEADER:100",
    "DATA:OFXSGML",
    "VERSION:102",
    "SECURITY:NONE",
    "ENCODING:USASCII",
    "CHARSET:1252",
    "COMPRESSION:NONE",
    "OLDFILEUID:NONE",
    "NEWFILEUID:NONE",
];

const INDENT: &str = "    ";

/// Writes a bank statement response for one account.
///
/// Every element is closed explicitly, so the body after the header is also
/// well-formed XML.
pub struct OfxWriter<'a> {
    config: &'a Config,
}

impl<'a> OfxWriter<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Render the whole document. `today` is used for `DTSERVER` and `DTEND`.
    pub fn render(&self, statement: &Statement, today: NaiveDate) -> String {
        let today = PostedDate::from(today).to_string();
        let mut doc = Markup::default();

        for line in OFX_HEADER {
            doc.raw(line);
        }
        doc.raw("");

        doc.open("OFX");

        doc.open("SIGNONMSGSRSV1");
        doc.open("SONRS");
        doc.status();
        doc.element("DTSERVER", &today);
        doc.element("LANGUAGE", "ENG");
        doc.close("SONRS");
        doc.close("SIGNONMSGSRSV1");

        doc.open("BANKMSGSRSV1");
        doc.open("STMTTRNRS");
        doc.element("TRNUID", "1");
        doc.status();
        doc.open("STMTRS");
        doc.element("CURDEF", &self.config.currency);

        doc.open("BANKACCTFROM");
        doc.element("BANKID", &self.config.bank_id);
        doc.element("ACCTID", &self.config.account_id);
        doc.element("ACCTTYPE", &self.config.account_type);
        doc.close("BANKACCTFROM");

        doc.open("BANKTRANLIST");
        doc.element("DTSTART", &PostedDate::EPOCH.to_string());
        doc.element("DTEND", &today);
        for txn in &statement.transactions {
            self.check_currency(txn);
            doc.transaction(txn);
        }
        doc.close("BANKTRANLIST");

        doc.open("LEDGERBAL");
        doc.element("BALAMT", &format_amount(statement.ledger_balance.amount));
        doc.element("DTASOF", &statement.ledger_balance.as_of.to_string());
        doc.close("LEDGERBAL");

        doc.close("STMTRS");
        doc.close("STMTTRNRS");
        doc.close("BANKMSGSRSV1");

        doc.close("OFX");

        info!(
            transactions = statement.transactions.len(),
            account = %self.config.account_id,
            "rendered OFX statement"
        );
        doc.finish()
    }

    /// Render first, then write in one go so a failure never leaves a
    /// partial document behind. Bytes are windows-1252 to match the header.
    pub fn write_to<W: Write>(
        &self,
        statement: &Statement,
        today: NaiveDate,
        out: &mut W,
    ) -> StatementResult<()> {
        let document = encode_document(&self.render(statement, today));
        out.write_all(&document)
            .and_then(|_| out.flush())
            .map_err(StatementError::WriteOutput)
    }

    fn check_currency(&self, txn: &Transaction) {
        if !txn.currency.is_empty() && txn.currency != self.config.currency {
            warn!(
                fit_id = %txn.fit_id,
                currency = %txn.currency,
                statement_currency = %self.config.currency,
                "transaction currency differs from statement currency; amount is not converted"
            );
        }
    }
}

#[derive(Default)]
struct Markup {
    out: String,
    depth: usize,
}

impl Markup {
    fn raw(&mut self, line: &str) {
        self.out.push_str(line);
        self.out.push('\n');
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
    }

    fn open(&mut self, tag: &str) {
        self.indent();
        self.out.push('<');
        self.out.push_str(tag);
        self.out.push_str(">\n");
        self.depth += 1;
    }

    fn close(&mut self, tag: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.indent();
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push_str(">\n");
    }

    fn element(&mut self, tag: &str, value: &str) {
        self.indent();
        self.out.push('<');
        self.out.push_str(tag);
        self.out.push('>');
        self.out.push_str(&escape(value));
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push_str(">\n");
    }

    fn status(&mut self) {
        self.open("STATUS");
        self.element("CODE", "0");
        self.element("SEVERITY", "INFO");
        self.close("STATUS");
    }

    fn transaction(&mut self, txn: &Transaction) {
        self.open("STMTTRN");
        self.element("TRNTYPE", txn.category.as_str());
        self.element("DTPOSTED", &txn.posted.to_string());
        self.element("TRNAMT", &format_amount(txn.amount));
        self.element("FITID", &txn.fit_id);
        self.element("NAME", &txn.name);
        self.element("MEMO", &txn.memo);
        self.close("STMTTRN");
    }

    fn finish(self) -> String {
        self.out
    }
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
