// pn532-nfc-rs/pn532-nfc/src/protocol/commands/sam.rs

//! SAMConfiguration

use crate::constants::PN532_CMD_SAM_CONFIGURATION;

/// Encode SAMConfiguration payload (command code 0x14)
pub fn encode_sam_configuration(mode: u8, timeout: u8, use_irq: u8) -> Vec<u8> {
    vec![PN532_CMD_SAM_CONFIGURATION, mode, timeout, use_irq]
}
