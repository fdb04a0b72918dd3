// pn532-nfc-rs/pn532-nfc/src/protocol/mod.rs

//! PN532 frame protocol: encoding commands, checking and decoding raw reads.
//!
//! Raw reads keep the leading I2C status byte, so every offset in here is
//! one past the offset in the PN532 manual.

pub mod checksum;
pub mod codec;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use checksum::{dcs, lcs, response_dcs};
pub use codec::{extract_uid, list_target_frame, verify_ack, verify_checksum, wakeup_frame};
pub use commands::Command;
pub use frame::Frame;
pub use responses::{decode_target, decode_wakeup};
