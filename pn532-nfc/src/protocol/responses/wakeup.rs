// pn532-nfc-rs/pn532-nfc/src/protocol/responses/wakeup.rs

//! SAMConfiguration (wakeup) response

use super::{expect_ack, expect_checksum};
use crate::constants::{
    PN532_TFI_DEVICE, RESPONSE_CODE_OFFSET, RESPONSE_TFI_OFFSET, WAKEUP_RESPONSE_LEN,
};
use crate::protocol::commands::Command;
use crate::protocol::parser;
use crate::Result;

/// Validate the reads that follow a wakeup (SAMConfiguration) write.
/// Layout: status(1) + 00 00 FF + LEN + LCS + D5 15 + DCS + 00
pub fn decode_wakeup(raw_ack: &[u8], response: &[u8]) -> Result<()> {
    expect_ack(raw_ack)?;
    parser::ensure_len(response, WAKEUP_RESPONSE_LEN)?;
    parser::expect_byte(response, RESPONSE_TFI_OFFSET, PN532_TFI_DEVICE)?;
    parser::expect_byte(response, RESPONSE_CODE_OFFSET, Command::wakeup().response_code())?;
    expect_checksum(response, WAKEUP_RESPONSE_LEN)
}
