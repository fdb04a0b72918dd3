#[path = "../common/mod.rs"]
mod common;

use pn532_nfc::Error;
use pn532_nfc::protocol::{decode_target, decode_wakeup, extract_uid, verify_ack};

#[test]
fn captured_exchange_decodes() {
    let ack = common::fixtures::ack();
    assert!(verify_ack(&ack));
    decode_wakeup(&ack, &common::fixtures::wakeup()).unwrap();

    let uid = decode_target(&ack, &common::fixtures::target()).unwrap();
    assert_eq!(uid, common::fixtures::sample_uid());
}

#[test]
fn extract_uid_ignores_surroundings() {
    let mut raw = vec![0x00; 20];
    raw[14..18].copy_from_slice(&common::fixtures::SAMPLE_UID);
    assert_eq!(extract_uid(&raw).unwrap(), common::fixtures::sample_uid());

    let mut noisy = common::fixtures::target();
    for (i, b) in noisy.iter_mut().enumerate() {
        if !(14..18).contains(&i) {
            *b = 0xA5;
        }
    }
    assert_eq!(extract_uid(&noisy).unwrap(), common::fixtures::sample_uid());
}

#[test]
fn target_reply_with_wakeup_length_is_rejected() {
    let ack = common::fixtures::ack();
    match decode_target(&ack, &common::fixtures::wakeup()) {
        Err(Error::InvalidLength {
            expected: 20,
            actual: 10,
        }) => {}
        other => panic!("expected InvalidLength, got {:?}", other),
    }
}
