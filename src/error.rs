//! Errors raised while building an [`EncodingConfig`](crate::config::EncodingConfig). Hashing and encoding
//! themselves are total and never fail.

use thiserror::Error;

/// Rejected encoding configuration values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The Base64 pad setting is neither empty nor a single character.
    #[error("invalid Base64 pad {0:?}: expected an empty string or a single character")]
    InvalidPad(String),

    /// Bits per input character other than 8 or 16.
    #[error("unsupported character size: expected 8 or 16 bits, got {0}")]
    UnsupportedCharSize(u32),

    /// Hex case name other than `lower` or `upper`.
    #[error("unknown hex case {0:?}: expected \"lower\" or \"upper\"")]
    UnknownHexCase(String),
}
