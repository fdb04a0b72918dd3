// pn532-nfc-rs/pn532-nfc/src/protocol/commands/list_target.rs

//! InListPassiveTarget

use crate::constants::PN532_CMD_INLIST_PASSIVE_TARGET;

/// Encode InListPassiveTarget payload (command code 0x4A)
pub fn encode_in_list_passive_target(max_targets: u8, baud_rate: u8) -> Vec<u8> {
    vec![PN532_CMD_INLIST_PASSIVE_TARGET, max_targets, baud_rate]
}
