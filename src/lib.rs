//! MD5, HMAC-MD5 and Base64 for text exchanged with a legacy web client.
//!
//! Digests are rendered as hex, Base64 or raw bytes, driven by an explicit [`EncodingConfig`] that is bound into a
//! [`MessageDigestEngine`]. The output is bit-for-bit compatible with the client's encoder, including its quirks:
//! text is hashed per UTF-16 code unit, the MD5 length field keeps only 32 bits and characters outside the Basic
//! Multilingual Plane are UTF-8 encoded as surrogate pairs.

pub mod codec;
pub mod config;
pub mod engine;
pub mod error;
pub mod lang;

pub use config::{CharSize, EncodingConfig, HexCase};
pub use engine::{base64_encode, MessageDigestEngine};
pub use error::ConfigError;

/// UTF-8 bytes of ``text``, see [`codec::utf8::encode`].
pub fn utf8_encode(text: &str) -> Vec<u8> {
    codec::utf8::encode(text)
}
