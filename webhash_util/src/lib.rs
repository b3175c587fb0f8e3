//! Conversions between byte sequences and sequences of 32 bit words.

/// Copies the ``source`` array to the ``dest`` array, treating every four bytes of ``source`` as one little endian
/// integer. ``source`` must be at least four times bigger than ``dest``.
pub fn align_to_u32a_le(dest: &mut [u32], source: &[u8]) {
    assert!(source.len() >= dest.len() * 4);

    for (dword, bytes) in dest.iter_mut().zip(source.chunks_exact(4)) {
        *dword = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
}

/// Unpack little endian words into their byte sequence. The least significant byte of each word comes first, so
/// this is the inverse of [`align_to_u32a_le`].
pub fn unpack_u32_le(source: &[u32]) -> Vec<u8> {
    source.iter().flat_map(|word| word.to_le_bytes().to_vec()).collect()
}
