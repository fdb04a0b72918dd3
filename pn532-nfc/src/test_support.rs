//! Test support helpers intended for use by unit and integration tests.
//!
//! These build the raw I2C reads a PN532 produces (status byte included)
//! and pre-seed a `MockTransport` with them, so tests across the crate and
//! the tests/ directory share one notion of a well-formed exchange.
#![allow(dead_code)]

use crate::constants::{
    PN532_ACK, PN532_I2C_READY, PN532_POSTAMBLE, PN532_PREAMBLE, PN532_RESP_INLIST_PASSIVE_TARGET,
    PN532_RESP_SAM_CONFIGURATION, PN532_STARTCODE, PN532_TFI_DEVICE,
};
use crate::protocol::checksum::{dcs, lcs};
use crate::reader::CardReader;
use crate::transport::mock::MockTransport;

/// 8-byte ACK read: ready status + ACK frame + one trailing byte.
#[doc(hidden)]
pub fn ack_read() -> Vec<u8> {
    let mut out = Vec::with_capacity(8);
    out.push(PN532_I2C_READY);
    out.extend_from_slice(&PN532_ACK);
    out.push(0x00);
    out
}

/// Raw read of a device->host frame carrying `body` after the D5 TFI.
#[doc(hidden)]
pub fn device_reply(body: &[u8]) -> Vec<u8> {
    let mut payload = Vec::with_capacity(1 + body.len());
    payload.push(PN532_TFI_DEVICE);
    payload.extend_from_slice(body);

    let len = payload.len() as u8;
    let mut out = Vec::with_capacity(payload.len() + 8);
    out.push(PN532_I2C_READY);
    out.push(PN532_PREAMBLE);
    out.extend_from_slice(&PN532_STARTCODE);
    out.push(len);
    out.push(lcs(len));
    out.extend_from_slice(&payload);
    out.push(dcs(&payload));
    out.push(PN532_POSTAMBLE);
    out
}

/// 10-byte SAMConfiguration reply.
#[doc(hidden)]
pub fn wakeup_response() -> Vec<u8> {
    device_reply(&[PN532_RESP_SAM_CONFIGURATION])
}

/// 20-byte InListPassiveTarget reply for one ISO14443-A target.
#[doc(hidden)]
pub fn target_response(uid: [u8; 4]) -> Vec<u8> {
    let mut body = vec![
        PN532_RESP_INLIST_PASSIVE_TARGET,
        0x01, // NbTg
        0x01, // Tg
        0x00, // SENS_RES
        0x04,
        0x08, // SEL_RES
        0x04, // NFCIDLength
    ];
    body.extend_from_slice(&uid);
    device_reply(&body)
}

/// Queue a successful wakeup exchange (ACK + reply).
#[doc(hidden)]
pub fn seed_wakeup(mock: &mut MockTransport) {
    mock.push_read(ack_read());
    mock.push_read(wakeup_response());
}

/// Queue a detection exchange reporting `uid`.
#[doc(hidden)]
pub fn seed_target(mock: &mut MockTransport, uid: [u8; 4]) {
    mock.push_read(ack_read());
    mock.push_read(target_response(uid));
}

/// A MockTransport that answers one wakeup and then `detections` identical
/// detections of `uid`.
#[doc(hidden)]
pub fn mock_with_card(uid: [u8; 4], detections: usize) -> MockTransport {
    let mut mock = MockTransport::new();
    seed_wakeup(&mut mock);
    for _ in 0..detections {
        seed_target(&mut mock, uid);
    }
    mock
}

/// Convenience: a CardReader with default configuration over
/// [`mock_with_card`].
#[doc(hidden)]
pub fn reader_with_card(uid: [u8; 4], detections: usize) -> CardReader<MockTransport> {
    CardReader::new(mock_with_card(uid, detections))
}
