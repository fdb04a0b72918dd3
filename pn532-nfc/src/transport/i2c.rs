// pn532-nfc-rs/pn532-nfc/src/transport/i2c.rs

//! `Transport` over any `embedded-hal` 1.0 I2C bus and delay provider.
//! Only built with `--features embedded-hal`.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{Error as _, I2c};

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Blocking I2C transport. Owns the bus and the delay source for the
/// lifetime of the reader; use [`I2cTransport::release`] to get them back.
pub struct I2cTransport<I2C, D> {
    i2c: I2C,
    delay: D,
}

impl<I2C, D> I2cTransport<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Wrap a bus and a delay provider.
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self { i2c, delay }
    }

    /// Give back the bus and delay provider.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }
}

fn bus_error<E: embedded_hal::i2c::Error>(err: E) -> Error {
    Error::Bus(format!("{:?}", err.kind()))
}

impl<I2C, D> Transport for I2cTransport<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    fn write(&mut self, address: u8, data: &[u8]) -> Result<()> {
        self.i2c.write(address, data).map_err(bus_error)
    }

    fn read(&mut self, address: u8, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        self.i2c.read(address, &mut buf).map_err(bus_error)?;
        Ok(buf)
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
