use crate::config::HexCase;

/// Render ``bytes`` as hexadecimal, high nibble first, in the given letter case.
pub fn encode(bytes: &[u8], case: HexCase) -> String {
    let digits = case.digits();
    let mut hex = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        hex.push(digits[usize::from(byte >> 4)] as char);
        hex.push(digits[usize::from(byte & 0x0F)] as char);
    }
    hex
}
