// pn532-nfc-rs/pn532-nfc/src/protocol/codec.rs

//! Fixed command frames and lenient checks on raw reads

use crate::constants::{PN532_ACK, PN532_TFI_HOST, RESPONSE_UID_OFFSET};
use crate::types::Uid;
use crate::Result;

use super::checksum::response_dcs;
use super::commands::Command;
use super::parser;
use super::Frame;

/// Encode a Command into a full wire frame (TFI, LCS/DCS, envelope).
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>> {
    let body = cmd.encode();
    let mut payload = Vec::with_capacity(1 + body.len());
    payload.push(PN532_TFI_HOST);
    payload.extend_from_slice(&body);
    Frame::encode(&payload)
}

/// `00 00 FF 05 FB D4 14 01 14 01 02 00`
pub fn wakeup_frame() -> Result<Vec<u8>> {
    encode_command_frame(&Command::wakeup())
}

/// `00 00 FF 04 FC D4 4A 01 00 E1 00`
pub fn list_target_frame() -> Result<Vec<u8>> {
    encode_command_frame(&Command::detect_single_target())
}

/// True iff `raw_ack[1..7]` is the ACK frame. Byte 0 is the I2C status byte.
pub fn verify_ack(raw_ack: &[u8]) -> bool {
    raw_ack.get(1..1 + PN532_ACK.len()) == Some(&PN532_ACK[..])
}

/// True iff the DCS stored at `response[declared_len - 2]` matches the one
/// recomputed over the response (see [`response_dcs`]).
pub fn verify_checksum(response: &[u8], declared_len: usize) -> bool {
    match response_dcs(response, declared_len) {
        Some(expected) => response[declared_len - 2] == expected,
        None => false,
    }
}

/// The 4 UID bytes of an InListPassiveTarget reply. Only bounds are
/// checked; the caller decides what a sentinel UID means.
pub fn extract_uid(response: &[u8]) -> Result<Uid> {
    parser::uid_at(response, RESPONSE_UID_OFFSET)
}
