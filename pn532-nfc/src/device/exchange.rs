// pn532-nfc-rs/pn532-nfc/src/device/exchange.rs

//! One command transaction on the bus

use log::trace;

use crate::constants::ACK_READ_LEN;
use crate::reader::ReaderConfig;
use crate::transport::Transport;
use crate::utils::bytes_to_hex_spaced;
use crate::Result;

/// Raw reads that follow one command write. Owned by the caller and
/// dropped once interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Raw ACK read, status byte included
    pub ack: Vec<u8>,
    /// Raw response read, status byte included
    pub response: Vec<u8>,
}

/// Run one command transaction: write `frame`, settle, read the 8-byte ACK,
/// settle, read `response_len` bytes.
///
/// Only bus failures are reported here; the reads are returned as-is and
/// validation is left to the response decoders.
pub fn exchange<T: Transport + ?Sized>(
    transport: &mut T,
    config: &ReaderConfig,
    frame: &[u8],
    response_len: usize,
) -> Result<Reply> {
    trace!("pn532 <- {}", bytes_to_hex_spaced(frame));
    transport.write(config.address, frame)?;
    transport.delay_ms(config.settle_delay_ms);

    let ack = transport.read(config.address, ACK_READ_LEN)?;
    trace!("pn532 ack -> {}", bytes_to_hex_spaced(&ack));
    transport.delay_ms(config.settle_delay_ms);

    let response = transport.read(config.address, response_len)?;
    trace!("pn532 resp -> {}", bytes_to_hex_spaced(&response));

    Ok(Reply { ack, response })
}
