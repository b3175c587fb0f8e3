use webhash_hashes::hmac::hmac;
use webhash_hashes::md5::MD5Hash;
use webhash_hashes::HashFunction;

use crate::codec::{self, base64, hex, utf8};
use crate::config::{EncodingConfig, HexCase};

/// RFC 1321 answer for the message `abc`.
const SELF_TEST_DIGEST: &str = "900150983cd24fb0d6963f7d28e17f72";

/// Computes MD5 digests and HMAC-MD5 codes and renders them as hex, raw bytes or Base64.
///
/// The engine holds nothing but its [`EncodingConfig`]. Every operation is a pure function of the config and
/// the input, so one engine can serve any number of threads.
///
/// ```
/// use webhash::MessageDigestEngine;
///
/// let engine = MessageDigestEngine::default();
/// assert_eq!(engine.digest_hex("abc"), "900150983cd24fb0d6963f7d28e17f72");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageDigestEngine {
    config: EncodingConfig,
}

impl MessageDigestEngine {
    pub fn new(config: EncodingConfig) -> Self {
        MessageDigestEngine { config }
    }

    pub fn config(&self) -> &EncodingConfig {
        &self.config
    }

    /// MD5 of ``message`` as 32 hex digits in the configured case.
    pub fn digest_hex(&self, message: &str) -> String {
        self.digest_hex_bytes(&self.message_bytes(message))
    }

    /// MD5 of ``message`` as Base64 with the configured pad.
    pub fn digest_base64(&self, message: &str) -> String {
        self.digest_base64_bytes(&self.message_bytes(message))
    }

    /// MD5 of ``message`` as the 16 raw digest bytes.
    pub fn digest_raw(&self, message: &str) -> Box<[u8]> {
        self.digest_raw_bytes(&self.message_bytes(message))
    }

    pub fn digest_hex_bytes(&self, message: &[u8]) -> String {
        self.render_hex(&self.digest_raw_bytes(message))
    }

    pub fn digest_base64_bytes(&self, message: &[u8]) -> String {
        self.render_base64(&self.digest_raw_bytes(message))
    }

    pub fn digest_raw_bytes(&self, message: &[u8]) -> Box<[u8]> {
        MD5Hash::digest_message(message).raw()
    }

    /// HMAC-MD5 of ``message`` under ``key`` as 32 hex digits. Both are converted to bytes with the configured
    /// character size, and keys longer than 64 bytes are hashed first.
    pub fn hmac_hex(&self, key: &str, message: &str) -> String {
        self.hmac_hex_bytes(&self.message_bytes(key), &self.message_bytes(message))
    }

    pub fn hmac_base64(&self, key: &str, message: &str) -> String {
        self.hmac_base64_bytes(&self.message_bytes(key), &self.message_bytes(message))
    }

    pub fn hmac_raw(&self, key: &str, message: &str) -> Box<[u8]> {
        self.hmac_raw_bytes(&self.message_bytes(key), &self.message_bytes(message))
    }

    pub fn hmac_hex_bytes(&self, key: &[u8], message: &[u8]) -> String {
        self.render_hex(&self.hmac_raw_bytes(key, message))
    }

    pub fn hmac_base64_bytes(&self, key: &[u8], message: &[u8]) -> String {
        self.render_base64(&self.hmac_raw_bytes(key, message))
    }

    pub fn hmac_raw_bytes(&self, key: &[u8], message: &[u8]) -> Box<[u8]> {
        hmac::<MD5Hash>(key, message)
    }

    /// UTF-8 encode ``text`` and render it as `=` padded Base64. The configured pad is ignored here, and line
    /// breaks are normalized to `\n` before encoding.
    pub fn base64_encode(&self, text: &str) -> String {
        base64_encode(text)
    }

    /// UTF-8 bytes of ``text``, see [`utf8::encode`].
    pub fn utf8_encode(&self, text: &str) -> Vec<u8> {
        utf8::encode(text)
    }

    /// Check the MD5 implementation against the RFC 1321 vector for `abc`, independent of the configured case.
    pub fn self_test(&self) -> bool {
        let lowercase = MessageDigestEngine::new(self.config.with_hex_case(HexCase::Lower));
        lowercase.digest_hex("abc") == SELF_TEST_DIGEST
    }

    fn message_bytes(&self, message: &str) -> Vec<u8> {
        codec::message_bytes(message, self.config.char_size)
    }

    fn render_hex(&self, digest: &[u8]) -> String {
        hex::encode(digest, self.config.hex_case)
    }

    fn render_base64(&self, digest: &[u8]) -> String {
        base64::encode(digest, self.config.base64_pad)
    }
}

/// UTF-8 encode ``text`` after normalizing its line breaks and render it as `=` padded Base64.
pub fn base64_encode(text: &str) -> String {
    base64::encode(&utf8::encode(&utf8::normalize_newlines(text)), Some('='))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::config::CharSize;

    use super::*;

    const FOX: &str = "The quick brown fox jumps over the lazy dog";

    fn upper_padded() -> MessageDigestEngine {
        MessageDigestEngine::new(EncodingConfig::rfc_compliant().with_hex_case(HexCase::Upper))
    }

    #[test]
    fn known_digests() {
        let engine = MessageDigestEngine::default();
        assert_eq!(engine.digest_hex("abc"), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(engine.digest_hex(""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(engine.digest_base64("abc"), "kAFQmDzST7DWlj99KOF/cg");
        assert_eq!(upper_padded().digest_hex("abc"), "900150983CD24FB0D6963F7D28E17F72");
        assert_eq!(upper_padded().digest_base64("abc"), "kAFQmDzST7DWlj99KOF/cg==");
    }

    #[test]
    fn known_hmacs() {
        let engine = MessageDigestEngine::default();
        assert_eq!(engine.hmac_hex("key", FOX), "80070713463e7749b90c2dc24911e275");
        assert_eq!(engine.hmac_base64("key", FOX), "gAcHE0Y+d0m5DC3CSRHidQ");
        assert_eq!(upper_padded().hmac_base64("key", FOX), "gAcHE0Y+d0m5DC3CSRHidQ==");
        assert_eq!(&*engine.hmac_raw("key", FOX), &*engine.hmac_raw_bytes(b"key", FOX.as_bytes()));
    }

    #[test]
    fn hmac_long_text_key_is_hashed() {
        let engine = MessageDigestEngine::default();
        let key = "k".repeat(65);
        let hashed_key = engine.digest_raw(&key);
        assert_eq!(engine.hmac_hex(&key, FOX), engine.hmac_hex_bytes(&hashed_key, FOX.as_bytes()));
    }

    #[test]
    fn ascii_char_size_drops_high_bytes() {
        let engine = MessageDigestEngine::default();
        // U+0161 has the low byte 0x61 of `a`
        assert_eq!(engine.digest_hex("\u{161}"), engine.digest_hex("a"));
        assert_eq!(engine.digest_hex("é"), engine.digest_hex_bytes(&[0xE9]));
    }

    #[test]
    fn unicode_char_size_hashes_utf16() {
        let engine = MessageDigestEngine::new(EncodingConfig::default().with_char_size(CharSize::Unicode));
        assert_eq!(engine.digest_hex("abc"), "ce1473cf80c6b3fda8e3dfc006adc315");
        assert_eq!(engine.hmac_hex("key", "abc"), "23d0e0761a0c9be226de1a9badd0e54c");
        assert_ne!(engine.digest_hex("\u{161}"), engine.digest_hex("a"));
    }

    #[test]
    fn base64_encode_ignores_configured_pad() {
        let unpadded = MessageDigestEngine::default();
        assert_eq!(unpadded.config().base64_pad, None);
        assert_eq!(unpadded.base64_encode("Kevin van Zonneveld"), "S2V2aW4gdmFuIFpvbm5ldmVsZA==");
        assert_eq!(unpadded.base64_encode("é"), "w6k=");
        assert_eq!(unpadded.base64_encode(""), "");
    }

    #[test]
    fn base64_encode_normalizes_line_breaks() {
        assert_eq!(base64_encode("a\r\nb"), base64_encode("a\nb"));
        assert_eq!(base64_encode("a\rb"), "YQpi");
    }

    #[test]
    fn self_test_passes_in_every_configuration() {
        assert!(MessageDigestEngine::default().self_test());
        assert!(upper_padded().self_test());
    }

    proptest! {
        #[test]
        fn hex_digest_shape(message in ".*") {
            let lower = MessageDigestEngine::default().digest_hex(&message);
            prop_assert_eq!(lower.len(), 32);
            prop_assert!(lower.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));

            let upper = upper_padded().digest_hex(&message);
            prop_assert!(upper.bytes().all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b)));
            prop_assert_eq!(upper.to_lowercase(), lower);
        }

        #[test]
        fn renderings_project_one_digest(message in ".*") {
            for engine in [MessageDigestEngine::default(), upper_padded()].iter() {
                let raw = engine.digest_raw(&message);
                prop_assert_eq!(raw.len(), 16);
                prop_assert_eq!(crate::codec::hex::encode(&raw, engine.config().hex_case), engine.digest_hex(&message));
                prop_assert_eq!(crate::codec::base64::encode(&raw, engine.config().base64_pad), engine.digest_base64(&message));
            }
        }

        #[test]
        fn operations_are_idempotent(key in ".{0,80}", message in ".*") {
            let engine = MessageDigestEngine::default();
            prop_assert_eq!(engine.digest_hex(&message), engine.digest_hex(&message));
            prop_assert_eq!(engine.digest_base64(&message), engine.digest_base64(&message));
            prop_assert_eq!(engine.hmac_hex(&key, &message), engine.hmac_hex(&key, &message));
            prop_assert_eq!(engine.base64_encode(&message), engine.base64_encode(&message));
        }
    }
}
