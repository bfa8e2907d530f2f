//! Base64 Alphabet Module
//!
//! The fixed 64-character alphabet used by Base64-VLQ digits.

use once_cell::sync::Lazy;

pub const B64_DIGITS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

// Reverse lookup table, -1 for characters outside the alphabet.
static B64_VALUES: Lazy<[i8; 128]> = Lazy::new(|| {
    let mut table = [-1i8; 128];
    for (value, ch) in B64_DIGITS.bytes().enumerate() {
        table[ch as usize] = value as i8;
    }
    table
});

/// Returns the 6-bit value of an alphabet character, or `None` for any
/// character outside the 64-symbol alphabet.
pub fn from_base64_digit(ch: char) -> Option<u8> {
    if !ch.is_ascii() {
        return None;
    }
    match B64_VALUES[ch as usize] {
        -1 => None,
        value => Some(value as u8),
    }
}

/// Returns the alphabet character for a 6-bit value, or `None` if the value
/// is outside `[0, 63]`.
pub fn to_base64_digit(value: u8) -> Option<char> {
    B64_DIGITS.as_bytes().get(value as usize).map(|b| *b as char)
}
