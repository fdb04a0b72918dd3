//! Utilities for pn532-nfc: small, reusable helpers used across the crate.
//!
//! Currently this is byte formatting for logging and for rendering UIDs.

pub mod hex;

pub use hex::*;
