// pn532-nfc-rs/pn532-nfc/src/transport/traits.rs

//! The `Transport` seam between protocol logic and the bus

use crate::Result;

/// Transport trait abstracts bus I/O away from protocol/device logic.
///
/// Implementations are expected to return exactly `len` bytes from `read`
/// whenever the bus transfer itself succeeds; a device that has nothing to
/// say shows up as garbage or zeros, which the frame checks then reject.
pub trait Transport {
    /// Write raw bytes to the device at the 7-bit `address`
    fn write(&mut self, address: u8, data: &[u8]) -> Result<()>;

    /// Read `len` raw bytes from the device at the 7-bit `address`
    fn read(&mut self, address: u8, len: usize) -> Result<Vec<u8>>;

    /// Block for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<()> {
        (**self).write(address, data)
    }

    fn read(&mut self, address: u8, len: usize) -> Result<Vec<u8>> {
        (**self).read(address, len)
    }

    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<()> {
        (**self).write(address, data)
    }

    fn read(&mut self, address: u8, len: usize) -> Result<Vec<u8>> {
        (**self).read(address, len)
    }

    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }
}
