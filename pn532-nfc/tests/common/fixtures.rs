// fixtures.rs — raw PN532 reads captured as hex, plus sample UIDs

use pn532_nfc::Uid;

/// Card UID used throughout the scenarios
pub const SAMPLE_UID: [u8; 4] = [0x04, 0x1F, 0xA2, 0x3B];

pub fn sample_uid() -> Uid {
    Uid::from_bytes(SAMPLE_UID)
}

/// ACK read as it comes off the bus (ready status first)
pub const ACK_HEX: &str = "01 0000ff00ff00 00";

/// SAMConfiguration reply
pub const WAKEUP_HEX: &str = "01 0000ff 02 fe d5 15 16 00";

/// InListPassiveTarget reply for SAMPLE_UID
pub const TARGET_HEX: &str = "01 0000ff 0c f4 d54b 01 01 0004 08 04 041fa23b ce 00";

pub fn from_hex(s: &str) -> Vec<u8> {
    let cleaned: String = s.split_whitespace().collect();
    hex::decode(cleaned).expect("fixture hex")
}

pub fn ack() -> Vec<u8> {
    from_hex(ACK_HEX)
}

pub fn wakeup() -> Vec<u8> {
    from_hex(WAKEUP_HEX)
}

pub fn target() -> Vec<u8> {
    from_hex(TARGET_HEX)
}
