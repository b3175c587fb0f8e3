//! Encoding configuration bound into a [`MessageDigestEngine`](crate::MessageDigestEngine).
//!
//! The three settings are fixed for the lifetime of an engine, so engines can be shared between threads freely.
//! Serialized form:
//!
//! ```json
//! { "hex_case": "upper", "base64_pad": "=", "char_size": 16 }
//! ```
//!
//! Every field is optional and falls back to lowercase hex, unpadded Base64 and 8 bits per character.

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Letter case of hexadecimal digest renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum HexCase {
    Lower,
    Upper,
}

impl HexCase {
    /// The sixteen digits in this case.
    pub fn digits(self) -> &'static [u8; 16] {
        match self {
            HexCase::Lower => b"0123456789abcdef",
            HexCase::Upper => b"0123456789ABCDEF",
        }
    }
}

impl Default for HexCase {
    fn default() -> Self {
        HexCase::Lower
    }
}

impl FromStr for HexCase {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lower" => Ok(HexCase::Lower),
            "upper" => Ok(HexCase::Upper),
            _ => Err(ConfigError::UnknownHexCase(s.to_string())),
        }
    }
}

impl TryFrom<String> for HexCase {
    type Error = ConfigError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl fmt::Display for HexCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HexCase::Lower => f.write_str("lower"),
            HexCase::Upper => f.write_str("upper"),
        }
    }
}

/// How many bits of every UTF-16 code unit of a text message are hashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum CharSize {
    /// Low byte of each code unit. Characters above U+00FF lose their high byte.
    Ascii,
    /// Both bytes of each code unit, little endian.
    Unicode,
}

impl CharSize {
    pub fn bits(self) -> u32 {
        match self {
            CharSize::Ascii => 8,
            CharSize::Unicode => 16,
        }
    }
}

impl Default for CharSize {
    fn default() -> Self {
        CharSize::Ascii
    }
}

impl TryFrom<u32> for CharSize {
    type Error = ConfigError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            8 => Ok(CharSize::Ascii),
            16 => Ok(CharSize::Unicode),
            other => Err(ConfigError::UnsupportedCharSize(other)),
        }
    }
}

impl From<CharSize> for u32 {
    fn from(size: CharSize) -> Self {
        size.bits()
    }
}

/// Parse a Base64 pad setting. The empty string disables padding.
pub fn parse_pad(pad: &str) -> Result<Option<char>, ConfigError> {
    let mut chars = pad.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Ok(None),
        (Some(c), None) => Ok(Some(c)),
        _ => Err(ConfigError::InvalidPad(pad.to_string())),
    }
}

/// The immutable encoding settings of a digest engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EncodingConfig {
    pub hex_case: HexCase,
    #[serde(with = "pad_format")]
    pub base64_pad: Option<char>,
    pub char_size: CharSize,
}

impl EncodingConfig {
    /// Lowercase hex, `=` padded Base64, 8 bits per character.
    pub fn rfc_compliant() -> Self {
        EncodingConfig::default().with_base64_pad(Some('='))
    }

    pub fn with_hex_case(self, hex_case: HexCase) -> Self {
        EncodingConfig { hex_case, ..self }
    }

    pub fn with_base64_pad(self, base64_pad: Option<char>) -> Self {
        EncodingConfig { base64_pad, ..self }
    }

    pub fn with_char_size(self, char_size: CharSize) -> Self {
        EncodingConfig { char_size, ..self }
    }
}

/// Serializes the pad as a string, empty meaning no padding.
mod pad_format {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(pad: &Option<char>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match pad {
            Some(c) => serializer.serialize_str(c.encode_utf8(&mut [0u8; 4])),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<char>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let pad = String::deserialize(deserializer)?;
        super::parse_pad(&pad).map_err(de::Error::custom)
    }
}
