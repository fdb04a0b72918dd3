// pn532-nfc-rs/pn532-nfc/src/protocol/checksum.rs

//! Length and data checksums

use crate::constants::{RESPONSE_LCS_OFFSET, RESPONSE_LEN_OFFSET};

/// Compute Length Checksum (LCS)
/// LCS = 0x100 - length (mod 256)
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Compute Data Checksum (DCS) over TFI + command + params
/// DCS = 0x100 - (sum(payload) & 0xff)
pub fn dcs(payload: &[u8]) -> u8 {
    let sum = payload.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    0u8.wrapping_sub(sum)
}

/// Expected DCS of a raw response read whose checksum sits at
/// `declared_len - 2`.
///
/// Sums `response[1..declared_len - 2]` minus the length and length-checksum
/// offsets (4 and 5), and returns `0xFF - (sum & 0xFF)`. The range starts at
/// the preamble, so the 0xFF start code is part of the sum; that is what
/// makes `0xFF - sum` line up with the device's `0x100 - sum` over the
/// payload. Returns `None` when `declared_len` does not fit the buffer.
pub fn response_dcs(response: &[u8], declared_len: usize) -> Option<u8> {
    if declared_len < 3 || declared_len > response.len() {
        return None;
    }
    let sum = response[..declared_len - 2]
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(i, _)| *i != RESPONSE_LEN_OFFSET && *i != RESPONSE_LCS_OFFSET)
        .fold(0u8, |acc, (_, &b)| acc.wrapping_add(b));
    Some(0xFF - sum)
}
