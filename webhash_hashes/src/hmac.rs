use tracing::debug;

use crate::HashFunction;

/// inner padding byte of RFC 2104
const INNER_PAD: u8 = 0x36;

/// outer padding byte of RFC 2104
const OUTER_PAD: u8 = 0x5C;

/// Generate a keyed-hash message authentication code from a `HashFunction` and a given key using the HMAC protocol
/// of RFC 2104.
/// #Parameters
/// - `key` a secret key for the authentication code
/// - `message` an arbitrary-sized message to authenticate
/// - `H` an arbitrary hash function
///
/// #Outputs
/// Returns a boxed slice containing the raw authentication code
pub fn hmac<H>(key: &[u8], message: &[u8]) -> Box<[u8]>
    where H: HashFunction {
    let shortened_key = if key.len() > H::BLOCK_SIZE {
        debug!(key_length = key.len(), block_size = H::BLOCK_SIZE, "reducing oversized HMAC key");
        H::digest_message(key).raw()
    } else {
        key.into()
    };

    let padded_key = pad(&shortened_key, H::BLOCK_SIZE);

    let mut inner_message = padded_key.iter().map(|v| v ^ INNER_PAD).collect::<Vec<_>>();
    let mut outer_message = padded_key.iter().map(|v| v ^ OUTER_PAD).collect::<Vec<_>>();

    inner_message.extend_from_slice(message);
    outer_message.extend_from_slice(&H::digest_message(&inner_message).raw());

    H::digest_message(&outer_message).raw()
}

/// Fill ``key`` up with zero bytes until it is ``length`` bytes long.
fn pad(key: &[u8], length: usize) -> Box<[u8]> {
    let mut padded_vec = key.to_vec();
    padded_vec.resize(length, 0u8);
    padded_vec.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use crate::md5::MD5Hash;
    use crate::tests::LONG_TEXT;

    use super::*;

    const HMAC_EXAMPLE: &[u8] = b"The quick brown fox jumps over the lazy dog";

    #[test]
    fn test_hmac_md5() {
        assert_eq!(hex::encode(hmac::<MD5Hash>(b"key", HMAC_EXAMPLE)),
                   "80070713463e7749b90c2dc24911e275");
    }

    #[test]
    fn test_hmac_md5_empty() {
        assert_eq!(hex::encode(hmac::<MD5Hash>(b"", b"")),
                   "74e6f7298a9c2d168935f58c001bad88");
    }

    #[test]
    fn test_hmac_md5_rfc_2202() {
        assert_eq!(hex::encode(hmac::<MD5Hash>(&[0x0b; 16], b"Hi There")),
                   "9294727a3638bb1c13f48ef8158bfc9d");
        assert_eq!(hex::encode(hmac::<MD5Hash>(b"Jefe", b"what do ya want for nothing?")),
                   "750c783e6ab0b503eaa86e310a5db738");
        assert_eq!(hex::encode(hmac::<MD5Hash>(&[0xaa; 80],
                                               b"Test Using Larger Than Block-Size Key - Hash Key First")),
                   "6b1ab7fe4bd7bf8f0b62e6ce61b9d0cd");
    }

    #[test]
    fn test_hmac_long_key_equals_hashed_key() {
        let key = LONG_TEXT.as_bytes();
        assert!(key.len() > 64);
        let hashed_key = MD5Hash::digest_message(key).raw();
        assert_eq!(hmac::<MD5Hash>(key, HMAC_EXAMPLE), hmac::<MD5Hash>(&hashed_key, HMAC_EXAMPLE));
    }

    #[test]
    fn test_hmac_block_sized_key_is_not_hashed() {
        let key = [0x42u8; 64];
        let hashed_key = MD5Hash::digest_message(&key).raw();
        assert_ne!(hmac::<MD5Hash>(&key, HMAC_EXAMPLE), hmac::<MD5Hash>(&hashed_key, HMAC_EXAMPLE));
    }

    #[test]
    fn test_pad() {
        assert_eq!(&*pad(b"ab", 4), &[b'a', b'b', 0, 0]);
        assert_eq!(pad(&[], 64).len(), 64);
    }
}
