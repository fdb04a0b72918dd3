//! Reader configuration

use crate::constants::{DEFAULT_SETTLE_DELAY_MS, PN532_I2C_ADDRESS};
use crate::{Error, Result};

/// Bus parameters for one PN532.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReaderConfig {
    /// 7-bit I2C address
    pub address: u8,
    /// Settle time between write, ACK read and response read (ms)
    pub settle_delay_ms: u32,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            address: PN532_I2C_ADDRESS,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
        }
    }
}

impl ReaderConfig {
    /// I2C addresses are 7 bits wide.
    pub fn validate(&self) -> Result<()> {
        if self.address > 0x7F {
            return Err(Error::InvalidConfig(format!(
                "address {:#04x} is not a 7-bit I2C address",
                self.address
            )));
        }
        Ok(())
    }
}
