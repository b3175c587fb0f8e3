//! Software implementation of MD5 and the HMAC construction on top of it. The API is granular, so single blocks
//! can be compressed and the padding applied by hand.

pub mod hmac;
pub mod md5;

/// Any hash function that can digest arbitrarily sized input.
pub trait HashFunction: Sized {
    /// The digestion block size of this hash function in bytes
    const BLOCK_SIZE: usize;

    /// The size of the raw output hash in bytes
    const OUTPUT_SIZE: usize;

    /// Digest a full message of arbitrary size.
    /// #Parameters
    /// - `input` a slice containing a (possibly large) chunk of byte data that is to be digested.
    ///
    /// #Output
    /// Returns the hash state of the digested input data. No assumptions can be made about whether the state can be
    /// used for further operations in the hash algorithm.
    fn digest_message(input: &[u8]) -> Self;

    /// Obtain the hash as a raw byte array of `OUTPUT_SIZE` bytes.
    fn raw(&self) -> Box<[u8]>;
}
