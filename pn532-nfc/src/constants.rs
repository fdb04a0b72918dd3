// pn532-nfc-rs/pn532-nfc/src/constants.rs
//! Protocol constants shared across the crate

/// 7-bit I2C address of the PN532 (8-bit write address 0x48 shifted right)
pub const PN532_I2C_ADDRESS: u8 = 0x48 >> 1;

/// Status byte the PN532 puts in front of every I2C read once it is ready
pub const PN532_I2C_READY: u8 = 0x01;

/// Frame preamble byte
pub const PN532_PREAMBLE: u8 = 0x00;

/// Start-of-packet code: 0x00 0xFF
pub const PN532_STARTCODE: [u8; 2] = [0x00, 0xFF];

/// Frame postamble byte
pub const PN532_POSTAMBLE: u8 = 0x00;

/// Frame identifier for host->PN532 frames
pub const PN532_TFI_HOST: u8 = 0xD4;
/// Frame identifier for PN532->host frames
pub const PN532_TFI_DEVICE: u8 = 0xD5;

/// SAMConfiguration command, used as the wakeup command
pub const PN532_CMD_SAM_CONFIGURATION: u8 = 0x14;
/// SAMConfiguration response code
pub const PN532_RESP_SAM_CONFIGURATION: u8 = 0x15;

/// InListPassiveTarget command code
pub const PN532_CMD_INLIST_PASSIVE_TARGET: u8 = 0x4A;
/// InListPassiveTarget response code
pub const PN532_RESP_INLIST_PASSIVE_TARGET: u8 = 0x4B;

/// ACK frame the PN532 returns after accepting a command
pub const PN532_ACK: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// Raw I2C read size of an ACK. Every read starts with one status byte.
pub const ACK_READ_LEN: usize = 8;
/// Raw I2C read size of the wakeup response
pub const WAKEUP_RESPONSE_LEN: usize = 10;
/// Raw I2C read size of the single target response
pub const TARGET_RESPONSE_LEN: usize = 20;

/// Offset of the TFI inside a raw response read
pub const RESPONSE_TFI_OFFSET: usize = 6;
/// Offset of the response code
pub const RESPONSE_CODE_OFFSET: usize = 7;
/// Offset of the first UID byte in a target response
pub const RESPONSE_UID_OFFSET: usize = 14;

/// Offset of the length byte, excluded from the data checksum
pub const RESPONSE_LEN_OFFSET: usize = 4;
/// Offset of the length checksum, excluded from the data checksum
pub const RESPONSE_LCS_OFFSET: usize = 5;

/// UID value reported by the reader when no tag is in the field
pub const NO_CARD_UID: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];

/// Default settle time between bus phases (ms)
pub const DEFAULT_SETTLE_DELAY_MS: u32 = 100;

/// Prefix put in front of a UID sent to a notification sink
pub const NOTIFY_PREFIX: &str = "NFC:";
