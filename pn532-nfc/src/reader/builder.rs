// pn532-nfc-rs/pn532-nfc/src/reader/builder.rs

//! Builder for [`CardReader`]

use crate::reader::{CardReader, ReaderConfig};
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a CardReader with optional configuration.
pub struct ReaderBuilder<T> {
    transport: Option<T>,
    config: ReaderConfig,
}

impl<T: Transport> Default for ReaderBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> ReaderBuilder<T> {
    /// Builder with the default configuration and no transport.
    pub fn new() -> Self {
        Self {
            transport: None,
            config: ReaderConfig::default(),
        }
    }

    /// Provide the bus transport (e.g. `MockTransport` or `I2cTransport`)
    pub fn with_transport(mut self, transport: T) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    /// 7-bit I2C address of the reader
    pub fn address(mut self, address: u8) -> Self {
        self.config.address = address;
        self
    }

    /// Settle time between bus phases
    pub fn settle_delay_ms(mut self, ms: u32) -> Self {
        self.config.settle_delay_ms = ms;
        self
    }

    /// Consume the builder and return a CardReader. Requires a transport;
    /// otherwise returns DeviceNotFound.
    pub fn build(self) -> Result<CardReader<T>> {
        self.config.validate()?;
        match self.transport {
            Some(t) => Ok(CardReader::with_config(t, self.config)),
            None => Err(Error::DeviceNotFound),
        }
    }
}
