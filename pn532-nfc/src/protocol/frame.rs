// pn532-nfc-rs/pn532-nfc/src/protocol/frame.rs

//! Normal information frame encoding

use crate::constants::{PN532_POSTAMBLE, PN532_PREAMBLE, PN532_STARTCODE};
use crate::protocol::checksum::{dcs, lcs};
use crate::{Error, Result};

/// PN532 normal information frame.
/// Format: [Preamble(1)] [StartCode(2)] [Len(1)] [LCS(1)] [TFI + Data(n)] [DCS(1)] [Postamble(1)]
/// Preamble: 0x00, StartCode: 0x00 0xFF, Postamble: 0x00
pub struct Frame;

impl Frame {
    /// Maximum TFI + data length of a normal frame
    pub const MAX_PAYLOAD_LEN: usize = 255;

    /// Wrap a payload (TFI byte first) into a full wire frame
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() > Self::MAX_PAYLOAD_LEN {
            return Err(Error::InvalidLength {
                expected: Self::MAX_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }

        let len = payload.len() as u8;
        let mut out = Vec::with_capacity(1 + 2 + 1 + 1 + payload.len() + 1 + 1);
        out.push(PN532_PREAMBLE);
        out.extend_from_slice(&PN532_STARTCODE);
        out.push(len);
        out.push(lcs(len));
        out.extend_from_slice(payload);
        out.push(dcs(payload));
        out.push(PN532_POSTAMBLE);
        Ok(out)
    }
}
