#[path = "../common/mod.rs"]
mod common;

use pn532_nfc::protocol::{dcs, lcs, response_dcs, verify_checksum};

#[test]
fn lcs_and_dcs_examples() {
    assert_eq!(lcs(4), 0xfc);
    assert_eq!(lcs(0), 0x00);
    assert_eq!(lcs(0xff), 0x01);

    assert_eq!(dcs(&[0xD4, 0x4A, 0x01, 0x00]), 0xe1);
    assert_eq!(dcs(&[]), 0x00);
}

#[test]
fn captured_replies_pass_checksum() {
    let wake = common::fixtures::wakeup();
    assert_eq!(response_dcs(&wake, wake.len()), Some(0x16));
    assert!(verify_checksum(&wake, wake.len()));

    let target = common::fixtures::target();
    assert!(verify_checksum(&target, target.len()));
}

#[test]
fn captured_reply_matches_generated_one() {
    assert_eq!(
        common::fixtures::target(),
        common::target_response(common::fixtures::SAMPLE_UID)
    );
    assert_eq!(common::fixtures::wakeup(), common::wakeup_response());
    assert_eq!(common::fixtures::ack(), common::ack_read());
}

#[test]
fn every_summed_byte_matters() {
    let target = common::fixtures::target();
    for idx in (1..18).filter(|i| *i != 4 && *i != 5) {
        let mut raw = target.clone();
        raw[idx] ^= 0x80;
        assert!(!verify_checksum(&raw, raw.len()), "offset {} not covered", idx);
    }
}
