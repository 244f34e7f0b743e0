use bank2ofx::{Config, StatementBuilder, StatementError, TransactionCategory, convert};
use chrono::NaiveDate;

const HEADER: &str = "Account name,Account number,Bank name,Currency,Country,Account status,Account type,Bank reference,Narrative,Customer reference,TRN type,Credit amount,Debit amount,Balance,Value date";

fn config() -> Config {
    Config::new(Some("021001088"), Some("123456789")).unwrap()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

fn run(content: &str) -> (Result<bank2ofx::Statement, StatementError>, String) {
    let mut sink = Vec::new();
    let result = convert(&config(), StatementBuilder::new().content(content), today(), &mut sink);
    (result, String::from_utf8(sink).unwrap())
}

#[test]
fn deposit_row_becomes_dep_transaction() {
    let content = format!(
        "{HEADER}\nACME LTD,123456789,HSBC BANK USA,USD,US,OPEN,CHECKING,REF001,ACH CREDIT DEPOSIT FROM ACME CORP,CUST01,DEPOSIT,\"1,000.00\",,\"5,250.10\",01/03/2020\n"
    );

    let (result, doc) = run(&content);
    let statement = result.unwrap();

    assert_eq!(statement.transactions.len(), 1);
    assert_eq!(statement.transactions[0].category, TransactionCategory::Dep);

    assert_eq!(doc.matches("<STMTTRN>").count(), 1);
    assert!(doc.contains("<TRNTYPE>DEP</TRNTYPE>"));
    assert!(doc.contains("<TRNAMT>1000.00</TRNAMT>"));
    assert!(doc.contains("<DTPOSTED>20200301</DTPOSTED>"));
    assert!(doc.contains("<FITID>202003011000.00</FITID>"));
    assert!(doc.contains("<NAME>ACME CORP</NAME>"));
    assert!(doc.contains("<MEMO>ACH CREDIT DEPOSIT FROM ACME CORP</MEMO>"));
    assert!(doc.contains("<DTEND>20261018</DTEND>"));
}

#[test]
fn both_credit_and_debit_aborts_without_output() {
    let content = format!(
        "{HEADER}\nACME LTD,123456789,HSBC BANK USA,USD,US,OPEN,CHECKING,REF001,REFUND,CUST01,CREDIT,10.00,5.00,100.00,01/03/2020\n"
    );

    let (result, doc) = run(&content);

    assert!(matches!(result, Err(StatementError::AmbiguousAmount { line: 2, .. })));
    assert!(doc.is_empty());
}

#[test]
fn unknown_category_aborts_without_output() {
    let content = format!(
        "{HEADER}\nACME LTD,123456789,HSBC BANK USA,USD,US,OPEN,CHECKING,REF001,GIFT,CUST01,STANDING ORDER,10.00,,100.00,01/03/2020\n"
    );

    let (result, doc) = run(&content);

    match result {
        Err(StatementError::UnknownCategory { code, .. }) => assert_eq!(code, "STANDING ORDER"),
        other => panic!("expected UnknownCategory, got {other:?}"),
    }
    assert!(doc.is_empty());
}

#[test]
fn short_row_aborts_without_output() {
    let content = format!("{HEADER}\nACME LTD,123456789\n");

    let (result, doc) = run(&content);

    assert!(matches!(
        result,
        Err(StatementError::MalformedInput { line: 2, expected: 15, found: 2 })
    ));
    assert!(doc.is_empty());
}

#[test]
fn long_narrative_is_stripped_then_truncated() {
    let counterparty = "ACME CORPORATION INTERNATIONAL HOLDINGS";
    let content = format!(
        "{HEADER}\nACME LTD,123456789,HSBC BANK USA,USD,US,OPEN,CHECKING,REF001,ACH CREDIT DEPOSIT FROM {counterparty},CUST01,TRANSFER,250.00,,250.00,15/06/2021\n"
    );

    let (result, doc) = run(&content);
    let statement = result.unwrap();

    let expected: String = counterparty.chars().take(32).collect();
    assert_eq!(statement.transactions[0].name, expected);
    assert!(doc.contains(&format!("<NAME>{expected}</NAME>")));
    assert!(doc.contains("<TRNTYPE>CREDIT</TRNTYPE>"));
}

#[test]
fn missing_identity_constants_fail_before_processing() {
    assert!(matches!(
        Config::new(None, Some("123456789")),
        Err(StatementError::Configuration(_))
    ));
    assert!(matches!(
        Config::new(Some("021001088"), None),
        Err(StatementError::Configuration(_))
    ));
}
