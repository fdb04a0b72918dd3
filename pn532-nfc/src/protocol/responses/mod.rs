// pn532-nfc-rs/pn532-nfc/src/protocol/responses/mod.rs

//! Strict decoders for the reads that follow each command

pub mod target;
pub mod wakeup;

pub use target::decode_target;
pub use wakeup::decode_wakeup;

use crate::protocol::checksum::response_dcs;
use crate::protocol::codec::verify_ack;
use crate::{Error, Result};

/// Error-returning form of [`verify_ack`].
pub(crate) fn expect_ack(raw_ack: &[u8]) -> Result<()> {
    if verify_ack(raw_ack) {
        Ok(())
    } else {
        Err(Error::AckMismatch(raw_ack.to_vec()))
    }
}

/// Error-returning form of `verify_checksum`, naming both checksum bytes.
pub(crate) fn expect_checksum(response: &[u8], declared_len: usize) -> Result<()> {
    let expected = response_dcs(response, declared_len).ok_or(Error::InvalidLength {
        expected: declared_len,
        actual: response.len(),
    })?;
    let actual = response[declared_len - 2];
    if actual != expected {
        return Err(Error::ChecksumMismatch { expected, actual });
    }
    Ok(())
}
