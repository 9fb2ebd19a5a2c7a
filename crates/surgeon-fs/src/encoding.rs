//! Decoding fallbacks and mojibake repair.
//!
//! The target files are UTF-8, occasionally UTF-8 with a signature, and
//! occasionally corrupted by a UTF-8-bytes-read-as-Latin-1 round trip.
//! Latin-1 here is the strict single-byte mapping: every byte decodes to
//! the code point of the same value, and only code points up to U+00FF
//! encode back.

/// UTF-8 byte-order mark.
const BOM: &str = "\u{feff}";

/// Which decoding produced a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoding {
    Utf8,
    /// UTF-8 with a leading signature, stripped on read.
    Utf8Bom,
    Latin1,
}

/// Decode bytes as UTF-8, stripping a BOM if present; fall back to
/// Latin-1 when the bytes are not valid UTF-8. Latin-1 cannot fail, so
/// every byte buffer decodes to something.
pub fn decode_with_fallback(bytes: &[u8]) -> (String, Decoding) {
    match std::str::from_utf8(bytes) {
        Ok(text) => match text.strip_prefix(BOM) {
            Some(stripped) => (stripped.to_string(), Decoding::Utf8Bom),
            None => (text.to_string(), Decoding::Utf8),
        },
        Err(_) => (decode_latin1(bytes), Decoding::Latin1),
    }
}

/// Undo one UTF-8-read-as-Latin-1 round trip: re-encode the text as
/// Latin-1 and re-decode the bytes as UTF-8. If the text contains
/// characters outside Latin-1, or the recovered bytes are not UTF-8,
/// the input was not mojibake of that shape and is returned unchanged.
///
/// There is no verification that the result is the intended text; the
/// original repair script wrote whatever came out, and so do we.
pub fn repair_mojibake(text: &str) -> String {
    let Some(bytes) = encode_latin1(text) else {
        return text.to_string();
    };
    match String::from_utf8(bytes) {
        Ok(repaired) => {
            tracing::debug!(
                before = text.len(),
                after = repaired.len(),
                "mojibake round trip succeeded"
            );
            repaired
        }
        Err(_) => text.to_string(),
    }
}

fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

fn encode_latin1(text: &str) -> Option<Vec<u8>> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).ok())
        .collect()
}
