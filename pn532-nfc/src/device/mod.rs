// pn532-nfc-rs/pn532-nfc/src/device/mod.rs

//! Device state and the bus transactions that change it

pub mod exchange;
pub mod handshake;

pub use exchange::{Reply, exchange};
pub use handshake::Handshake;

use derive_more::Display;

/// Whether the PN532 has completed its wakeup handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum DeviceState {
    /// Not woken yet, or the last wakeup attempt failed.
    #[default]
    #[display(fmt = "disabled")]
    Disabled,
    /// Wakeup handshake completed.
    #[display(fmt = "enabled")]
    Enabled,
}

impl DeviceState {
    /// True once the wakeup handshake succeeded.
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled)
    }
}
