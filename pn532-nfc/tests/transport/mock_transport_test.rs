#[path = "../common/mod.rs"]
mod common;

use pn532_nfc::Error;
use pn532_nfc::transport::{MockTransport, Transport};

#[test]
fn mock_transport_write_and_read() {
    let mut m = MockTransport::new();
    m.push_read(vec![0x01]);
    m.write(0x24, &[0xAA]).unwrap();
    assert_eq!(m.writes.len(), 1);
    let r = m.read(0x24, 1).unwrap();
    assert_eq!(r, vec![0x01]);
}

#[test]
fn write_failure_and_recovery() {
    let mut m = MockTransport::new();
    m.set_write_failures(1);
    assert!(matches!(m.write(0x24, &[0x00]), Err(Error::Bus(_))));
    m.write(0x24, &[0x00]).unwrap();
    assert_eq!(m.writes, vec![(0x24, vec![0x00])]);
}

#[test]
fn reads_are_exact_length() {
    let mut m = MockTransport::new();
    m.push_read(common::ack_read());
    assert_eq!(m.read(0x24, 20).unwrap().len(), 20);
    assert_eq!(m.read(0x24, 8).unwrap(), vec![0u8; 8]);
}
