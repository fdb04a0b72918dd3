// pn532-nfc-rs/pn532-nfc/src/protocol/responses/target.rs

//! InListPassiveTarget response

use super::{expect_ack, expect_checksum};
use crate::constants::{PN532_TFI_DEVICE, RESPONSE_TFI_OFFSET, TARGET_RESPONSE_LEN};
use crate::protocol::codec::extract_uid;
use crate::protocol::parser;
use crate::types::Uid;
use crate::{Error, Result};

/// Validate the reads that follow an InListPassiveTarget write and return
/// the target's UID.
///
/// Layout: status(1) + 00 00 FF + LEN + LCS + D5 4B + NbTg + Tg
/// + SENS_RES(2) + SEL_RES + NFCIDLength + UID(4) + DCS + 00
///
/// Gates run in order: ACK, TFI, checksum, then the no-card sentinel.
pub fn decode_target(raw_ack: &[u8], response: &[u8]) -> Result<Uid> {
    expect_ack(raw_ack)?;
    parser::ensure_len(response, TARGET_RESPONSE_LEN)?;
    parser::expect_byte(response, RESPONSE_TFI_OFFSET, PN532_TFI_DEVICE)?;
    expect_checksum(response, TARGET_RESPONSE_LEN)?;

    let uid = extract_uid(response)?;
    if uid.is_no_card() {
        return Err(Error::NoCard);
    }
    Ok(uid)
}
