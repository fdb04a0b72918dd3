// pn532-nfc-rs/pn532-nfc/src/transport/mock.rs

//! In-memory transport for tests

use std::collections::VecDeque;

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records every bus operation and
/// returns queued reads.
///
/// Reads are resized to the requested length: short entries are padded
/// with zeros, long ones are truncated, and an empty queue yields an
/// all-zero buffer, the same way a silent I2C device reads back.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Recorded writes: (address, data)
    pub writes: Vec<(u8, Vec<u8>)>,
    /// Recorded read requests: (address, len)
    pub read_requests: Vec<(u8, usize)>,
    /// Recorded delays in milliseconds
    pub delays: Vec<u32>,
    /// Queued read payloads, consumed front to back
    pub reads: VecDeque<Vec<u8>>,
    /// Testing hook: number of subsequent writes that should fail
    pub write_failures: usize,
}

impl MockTransport {
    /// Empty mock: no queued reads, nothing recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one read.
    pub fn push_read(&mut self, data: Vec<u8>) {
        self.reads.push_back(data);
    }

    /// Queue several reads in order.
    pub fn extend_reads<I: IntoIterator<Item = Vec<u8>>>(&mut self, reads: I) {
        self.reads.extend(reads);
    }

    /// Set how many subsequent writes should fail with a bus error.
    pub fn set_write_failures(&mut self, n: usize) {
        self.write_failures = n;
    }

    /// Data of every recorded write, dropping the address.
    pub fn written_frames(&self) -> Vec<&[u8]> {
        self.writes.iter().map(|(_, d)| d.as_slice()).collect()
    }

    /// Forget recorded traffic while keeping queued reads.
    pub fn clear_log(&mut self) {
        self.writes.clear();
        self.read_requests.clear();
        self.delays.clear();
    }
}

impl Transport for MockTransport {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<()> {
        if self.write_failures > 0 {
            self.write_failures -= 1;
            return Err(Error::Bus(format!("simulated write failure at {:#04x}", address)));
        }
        self.writes.push((address, data.to_vec()));
        Ok(())
    }

    fn read(&mut self, address: u8, len: usize) -> Result<Vec<u8>> {
        self.read_requests.push((address, len));
        let mut data = self.reads.pop_front().unwrap_or_default();
        data.resize(len, 0x00);
        Ok(data)
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delays.push(ms);
    }
}
