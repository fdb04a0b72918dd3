// pn532-nfc-rs/pn532-nfc/src/lib.rs

//! pn532-nfc
//!
//! Pure Rust driver for PN532 NFC readers attached over I2C. The driver
//! wakes the chip lazily, detects a single ISO14443-A target and reports
//! its 4-byte UID.
#![warn(missing_docs)]

pub mod constants;
pub mod device;
pub mod error;
pub mod notify;
pub mod prelude;
pub mod protocol;
pub mod reader;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`
// and the newtypes in `types` are available to consumers.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
