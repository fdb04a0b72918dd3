#[path = "../common/mod.rs"]
mod common;

use pn532_nfc::Uid;

const NO_CARD: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];

#[test]
fn sentinel_reply_is_absent_everywhere() {
    common::init_logging();
    let mut reader = common::reader_with_card(NO_CARD, 6);

    assert!(!reader.check_for_card());
    assert_eq!(reader.get_card_id(), None);
    assert_eq!(reader.card_id_string(), "");
    assert!(!reader.validate_card_id(NO_CARD));
    assert!(!reader.validate_card_id([0x00, 0x00, 0x00, 0x00]));
    assert!(!reader.validate_card_id(common::fixtures::SAMPLE_UID));
    assert_eq!(reader.last_uid(), Some(Uid::NO_CARD));
}

#[test]
fn near_sentinel_is_a_real_card() {
    let mut reader = common::reader_with_card([0xFF, 0xFF, 0xFF, 0xFE], 1);
    assert!(reader.check_for_card());
}
