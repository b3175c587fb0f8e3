/// The standard Base64 alphabet of RFC 4648.
const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Encode ``bytes`` as Base64. Every group of three bytes becomes four characters. A trailing partial group
/// is completed with ``pad``, or left short when ``pad`` is `None`.
pub fn encode(bytes: &[u8], pad: Option<char>) -> String {
    let mut encoded = String::with_capacity(padded_length(bytes.len()));

    for group in bytes.chunks(3) {
        let triplet = group
            .iter()
            .enumerate()
            .fold(0u32, |bits, (i, byte)| bits | u32::from(*byte) << (16 - 8 * i));

        // a group of n bytes carries n + 1 significant sextets
        for sextet in 0..4 {
            if sextet <= group.len() {
                encoded.push(ALPHABET[(triplet >> (18 - 6 * sextet) & 0x3F) as usize] as char);
            } else if let Some(pad) = pad {
                encoded.push(pad);
            }
        }
    }

    encoded
}

/// Length of the padded encoding of ``byte_length`` bytes.
pub fn padded_length(byte_length: usize) -> usize {
    (byte_length + 2) / 3 * 4
}
