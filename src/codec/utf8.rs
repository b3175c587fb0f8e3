//! UTF-8 encoding that walks UTF-16 code units.
//!
//! Every code point of the Basic Multilingual Plane is encoded exactly like standard UTF-8. Characters at or
//! above U+10000 are not combined: each half of their surrogate pair is encoded as its own three byte sequence
//! (the CESU-8 form), which keeps output identical to the legacy browser encoder that digests and Base64 strings
//! were produced with.

use std::borrow::Cow;

use tracing::trace;

/// Encode ``text`` into UTF-8 bytes, one to three bytes per UTF-16 code unit.
pub fn encode(text: &str) -> Vec<u8> {
    let mut encoded = Vec::with_capacity(text.len());

    for unit in text.encode_utf16() {
        match unit {
            0x0000..=0x007F => encoded.push(unit as u8),
            0x0080..=0x07FF => {
                encoded.push((unit >> 6) as u8 | 0xC0);
                encoded.push((unit & 0x3F) as u8 | 0x80);
            }
            _ => {
                if (0xD800..=0xDBFF).contains(&unit) {
                    trace!(high_surrogate = unit, "encoding supplementary-plane character as surrogate pair");
                }
                encoded.push((unit >> 12) as u8 | 0xE0);
                encoded.push((unit >> 6 & 0x3F) as u8 | 0x80);
                encoded.push((unit & 0x3F) as u8 | 0x80);
            }
        }
    }

    encoded
}

/// Turn `\r\n` and lone `\r` line breaks into `\n`.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}
