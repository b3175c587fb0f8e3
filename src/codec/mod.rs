//! Text codecs around the digest: rendering digest bytes as hex or Base64, turning text messages into the bytes
//! that get hashed, and UTF-8 encoding of text ahead of Base64.

pub mod base64;
pub mod hex;
pub mod utf8;

use crate::config::CharSize;

/// The bytes hashed for a text ``message``. Each UTF-16 code unit contributes its low byte under
/// [`CharSize::Ascii`] and both bytes, least significant first, under [`CharSize::Unicode`].
pub fn message_bytes(message: &str, char_size: CharSize) -> Vec<u8> {
    match char_size {
        CharSize::Ascii => message.encode_utf16().map(|unit| unit as u8).collect(),
        CharSize::Unicode => message
            .encode_utf16()
            .flat_map(|unit| unit.to_le_bytes().to_vec())
            .collect(),
    }
}
