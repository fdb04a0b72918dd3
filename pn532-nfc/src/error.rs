// pn532-nfc-rs/pn532-nfc/src/error.rs

//! Error type shared by the whole crate

use thiserror::Error;

/// Common error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No transport was supplied
    #[error("device not found")]
    DeviceNotFound,

    /// The underlying bus transfer failed
    #[error("bus error: {0}")]
    Bus(String),

    /// A buffer was shorter (or longer) than the frame needs
    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required length
        expected: usize,
        /// Length received
        actual: usize,
    },

    /// The ACK read did not carry `00 00 FF 00 FF 00`
    #[error("ack mismatch: got {0:02x?}")]
    AckMismatch(Vec<u8>),

    /// Data checksum of a response did not match
    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch {
        /// Checksum computed over the response
        expected: u8,
        /// Checksum byte found in the response
        actual: u8,
    },

    /// A TFI or response code byte had the wrong value
    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse {
        /// Byte the decoder required
        expected: u8,
        /// Byte found
        actual: u8,
    },

    /// The reader answered with the no-card UID
    #[error("no card detected")]
    NoCard,

    /// Rejected by [`crate::ReaderConfig::validate`]
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;
