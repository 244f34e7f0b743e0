//! Character set handling at the two byte boundaries: the export coming in
//! and the OFX document going out.

use encoding_rs::WINDOWS_1252;
use tracing::warn;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decode an export file.
///
/// Valid UTF-8 (BOM or not) is taken as is. Anything else is read as
/// windows-1252, the code page HSBCnet exports use.
pub fn decode_export(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => WINDOWS_1252
            .decode_without_bom_handling(bytes)
            .0
            .into_owned(),
    }
}

/// Encode a rendered document for the `CHARSET:1252` its header declares.
///
/// Characters with no windows-1252 byte become numeric character
/// references (`&#20013;`).
pub fn encode_document(document: &str) -> Vec<u8> {
    let (bytes, _, unmappable) = WINDOWS_1252.encode(document);
    if unmappable {
        warn!("document contains characters outside windows-1252; written as character references");
    }
    bytes.into_owned()
}
