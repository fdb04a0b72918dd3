#[path = "../common/mod.rs"]
mod common;

use pn532_nfc::protocol::{Command, Frame, codec};

#[test]
fn command_frames_match_wire_captures() {
    assert_eq!(
        codec::wakeup_frame().unwrap(),
        common::fixtures::from_hex("0000ff 05 fb d4 14011401 02 00")
    );
    assert_eq!(
        codec::list_target_frame().unwrap(),
        common::fixtures::from_hex("0000ff 04 fc d4 4a0100 e1 00")
    );
}

#[test]
fn encode_command_frame_wraps_tfi() {
    let cmd = Command::InListPassiveTarget {
        max_targets: 2,
        baud_rate: 0,
    };
    let frame = codec::encode_command_frame(&cmd).unwrap();
    let mut payload = vec![0xD4];
    payload.extend(cmd.encode());
    assert_eq!(frame, Frame::encode(&payload).unwrap());
    assert_eq!(frame[5], 0xD4);
    assert_eq!(frame[6], 0x4A);
}
