#[path = "../common/mod.rs"]
mod common;

use pn532_nfc::notify::{LineSink, RecordingSink};
use pn532_nfc::transport::MockTransport;
use pn532_nfc::CardReader;

#[test]
fn uart_line_gets_prefixed_uid() {
    let mut reader = common::reader_with_card(common::fixtures::SAMPLE_UID, 1);
    let mut uart = LineSink::new(Vec::new());
    reader.send_card_id(&mut uart);
    assert_eq!(uart.get_ref().as_slice(), b"NFC:4 31 162 59\r\n");
}

#[test]
fn no_card_sends_nothing() {
    let mut reader = common::reader_with_card([0xFF; 4], 1);
    let mut sink = RecordingSink::new();
    reader.send_card_id(&mut sink);
    assert!(sink.messages.is_empty());

    let mut reader = CardReader::new(MockTransport::new());
    let mut calls = 0;
    let mut counting = |_: &str| calls += 1;
    reader.send_card_id(&mut counting);
    assert_eq!(calls, 0);
}
