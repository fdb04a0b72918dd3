//! Byte formatting helpers used for logging and UID display.
//!
//! Spaced hex output for frame dumps and spaced decimal output for the
//! textual UID form.

use std::fmt::Write;

/// Convert a byte slice to a lowercase hex string with a single space between
/// each byte.
///
/// Example: `&[0xde, 0xad]` -> `"de ad"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    join_spaced(bytes, |s, b| {
        let _ = write!(s, "{:02x}", b);
    })
}

/// Convert a byte slice to unpadded decimal values separated by spaces.
///
/// Example: `&[0x04, 0xa2]` -> `"4 162"`
pub fn bytes_to_decimal_spaced(bytes: &[u8]) -> String {
    join_spaced(bytes, |s, b| {
        let _ = write!(s, "{}", b);
    })
}

fn join_spaced(bytes: &[u8], mut push: impl FnMut(&mut String, u8)) -> String {
    let mut s = String::with_capacity(bytes.len() * 4);
    for (i, &b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        push(&mut s, b);
    }
    s
}
