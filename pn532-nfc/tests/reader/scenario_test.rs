#[path = "../common/mod.rs"]
mod common;

use pn532_nfc::prelude::*;
use pn532_nfc::transport::MockTransport;

#[test]
fn valid_wakeup_then_card() -> anyhow::Result<()> {
    common::init_logging();
    let mut mock = MockTransport::new();
    mock.extend_reads([common::fixtures::ack(), common::fixtures::wakeup()]);
    for _ in 0..4 {
        mock.extend_reads([common::fixtures::ack(), common::fixtures::target()]);
    }

    let mut reader = ReaderBuilder::new().with_transport(mock).build()?;

    assert_eq!(reader.card_id_string(), "4 31 162 59");
    assert_eq!(
        reader.get_card_id().map(|u| u.to_hex()),
        Some("04 1f a2 3b".to_string())
    );
    assert!(reader.validate_card_id([0x04, 0x1F, 0xA2, 0x3B]));
    assert!(!reader.validate_card_id([0x00, 0x00, 0x00, 0x00]));
    Ok(())
}

#[test]
fn mismatched_uid_is_false() {
    common::init_logging();
    let mut reader = common::reader_with_card(common::fixtures::SAMPLE_UID, 1);
    assert!(!reader.validate_card_id([0x00, 0x00, 0x00, 0x00]));
}

#[test]
fn corrupted_ack_on_detect_keeps_device_enabled() {
    common::init_logging();
    let mut mock = MockTransport::new();
    common::seed_wakeup(&mut mock);
    let mut ack = common::fixtures::ack();
    ack[5] = 0x00;
    mock.extend_reads([ack, common::fixtures::target()]);
    common::seed_target(&mut mock, common::fixtures::SAMPLE_UID);

    let mut reader = CardReader::new(mock);
    assert!(!reader.check_for_card());
    assert_eq!(reader.state(), DeviceState::Enabled);

    // next call goes straight to detection
    assert!(reader.check_for_card());
    assert_eq!(reader.transport().writes.len(), 3);
}

#[test]
fn failed_wakeup_is_retried_on_next_query() {
    common::init_logging();
    let mut mock = MockTransport::new();
    let mut wake = common::fixtures::wakeup();
    wake[7] = 0x14;
    mock.extend_reads([common::fixtures::ack(), wake]);
    mock.extend_reads([common::fixtures::ack(), common::fixtures::target()]);
    let mut reader = CardReader::new(mock);

    // the device answers the detect even though the wakeup echo was wrong
    assert!(reader.check_for_card());
    assert_eq!(reader.state(), DeviceState::Disabled);
    let writes = reader.transport().written_frames();
    assert_eq!(writes.len(), 2);
    assert_eq!(writes[0][6], 0x14);
    assert_eq!(writes[1][6], 0x4A);

    // Disabled, so the next query wakes again before detecting
    reader.transport_mut().clear_log();
    common::seed_wakeup(reader.transport_mut());
    common::seed_target(reader.transport_mut(), common::fixtures::SAMPLE_UID);
    assert!(reader.check_for_card());
    assert_eq!(reader.state(), DeviceState::Enabled);
    assert_eq!(reader.transport().writes.len(), 2);
}

#[test]
fn silent_bus_never_reports_a_card() {
    common::init_logging();
    let mut reader = CardReader::new(MockTransport::new());
    assert!(!reader.check_for_card());
    assert_eq!(reader.get_card_id(), None);
    assert!(!reader.validate_card_id([0, 0, 0, 0]));
    assert_eq!(reader.state(), DeviceState::Disabled);
    // every call retried the wakeup
    assert_eq!(reader.transport().writes.len(), 6);
}

#[test]
fn boxed_transport_reader() {
    let boxed: Box<dyn Transport> = Box::new(common::mock_with_card(common::fixtures::SAMPLE_UID, 1));
    let mut reader = CardReader::new(boxed);
    assert_eq!(reader.get_card_id(), Some(common::fixtures::sample_uid()));
}
