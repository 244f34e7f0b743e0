//! Display name and memo derived from the bank's narrative text.

/// OFX 1.02 limit for `NAME`.
pub const MAX_NAME_LEN: usize = 32;
/// OFX 1.02 limit for `MEMO`.
pub const MAX_MEMO_LEN: usize = 255;

/// Text the bank puts in front of the counterparty name.
///
/// Scanned in order and only the first match is stripped, so a prefix must
/// come before any shorter prefix it starts with.
pub const BOILERPLATE_PREFIXES: &[&str] = &[
    "ACH CREDIT DEPOSIT FROM ",
    "ACH DEBIT PAYMENT TO ",
    "ACH CREDIT ",
    "ACH DEBIT ",
    "POS PURCHASE ",
    "TRANSFER FROM ",
    "TRANSFER TO ",
];

/// Narrative with the first matching boilerplate prefix removed.
///
/// Falls back to the whole narrative when the prefix is all there is; later
/// prefixes are never tried once one has matched.
pub fn strip_prefix(narrative: &str) -> &str {
    let narrative = narrative.trim_start();

    match BOILERPLATE_PREFIXES
        .iter()
        .find_map(|prefix| narrative.strip_prefix(prefix))
        .map(str::trim)
    {
        Some(rest) if !rest.is_empty() => rest,
        _ => narrative.trim_end(),
    }
}

pub fn display_name(narrative: &str) -> String {
    truncate(strip_prefix(narrative), MAX_NAME_LEN)
}

pub fn memo(narrative: &str) -> String {
    truncate(narrative.trim(), MAX_MEMO_LEN)
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
