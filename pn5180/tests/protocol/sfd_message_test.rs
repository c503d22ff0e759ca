#[path = "../common/mod.rs"]
mod common;

use pn5180::protocol::sfd::{Frame, Header};
use pn5180::protocol::{ReceiveFrame, SecureMessage, SendFrame};
use pn5180::{Direction, Error, FirmwareVersion, SfdOpcode, SfdState};
use proptest::prelude::*;

#[test]
fn get_version_request_bytes() {
    let msg = SecureMessage::send(SendFrame::version_query(SfdOpcode::GetVersion)).unwrap();
    assert_eq!(msg.encode(), common::fixtures::get_version_request());
}

#[test]
fn request_decodes_back() {
    let msg = SecureMessage::decode(&common::fixtures::get_version_request()).unwrap();
    assert_eq!(msg.direction(), Direction::Send);
    let frame = msg.as_send().unwrap();
    assert_eq!(frame.opcode, SfdOpcode::GetVersion);
    // The zeroed version field reads back as payload.
    assert_eq!(frame.payload, vec![0x00, 0x00, 0x00]);
    assert!(msg.as_receive().is_none());
}

#[test]
fn version_reply_payload() {
    let msg = SecureMessage::decode(&common::fixtures::version_reply()).unwrap();
    match msg.frame() {
        Frame::Receive(f) => {
            assert_eq!(f.state, SfdState::Ok);
            assert_eq!(&f.payload[8..], &[0x03, 0x05]);
        }
        other => panic!("expected receive frame, got {:?}", other),
    }
}

#[test]
fn receive_message_with_payload() {
    let msg = SecureMessage::receive(ReceiveFrame::new(SfdState::Ok, vec![0xAA, 0xBB])).unwrap();
    assert_eq!(msg.crc(), 0x6ED5);
    assert_eq!(msg.encode(), hex::decode("ff000300aabb6ed5").unwrap());
}

#[test]
fn die_id_request_crc() {
    let msg = SecureMessage::send(SendFrame::new(SfdOpcode::GetDieId, vec![])).unwrap();
    assert_eq!(msg.encode(), vec![0x7F, 0x00, 0x01, 0xF4, 0x50, 0x36]);
}

#[test]
fn firmware_version_field_is_counted_in_length() {
    let frame = SendFrame::new(SfdOpcode::SecureWrite, vec![0x01, 0x02])
        .with_firmware_version(FirmwareVersion::new(4, 1));
    let msg = SecureMessage::send(frame).unwrap();
    assert_eq!(msg.header().pkg_length(), 6);
    assert_eq!(&msg.encode()[3..9], &[0xC0, 0x00, 0x04, 0x01, 0x01, 0x02]);
}

#[test]
fn header_keeps_nonzero_rfu_on_decode() {
    let h = Header::from_bytes([0xF8, 0x00]);
    assert_eq!(h.rfu(), 0x1F);
    assert_eq!(h.pkg_length(), 0);
    assert!(!h.continuation());
}

#[test]
fn length_mismatch_is_rejected() {
    // Header claims 5 frame bytes, only 4 present.
    let mut bytes = common::fixtures::get_version_request();
    bytes[2] = 0x05;
    assert!(matches!(
        SecureMessage::decode(&bytes),
        Err(Error::InvalidLength { expected: 10, actual: 9 })
    ));
}

#[test]
fn unknown_state_after_valid_crc_is_a_decode_error() {
    // Valid CRC over a state byte no variant maps to.
    let header = [0x00, 0x01];
    let frame = [0x42];
    let crc = pn5180::protocol::crc::crc16_parts(&[&header, &frame]).to_be_bytes();
    let bytes = [0xFF, header[0], header[1], frame[0], crc[0], crc[1]];
    assert!(matches!(
        SecureMessage::decode(&bytes),
        Err(Error::Decode { kind: "sfd state", value: 0x42 })
    ));
}

proptest! {
    #[test]
    fn receive_messages_survive_decode(
        payload in prop::collection::vec(any::<u8>(), 0..=255),
        ok in any::<bool>(),
    ) {
        let state = if ok { SfdState::Ok } else { SfdState::BufferOverflow };
        let msg = SecureMessage::receive(ReceiveFrame::new(state, payload)).unwrap();
        let bytes = msg.encode();
        let decoded = SecureMessage::decode(&bytes).unwrap();
        prop_assert_eq!(&decoded, &msg);
        prop_assert_eq!(decoded.encode(), bytes);
    }

    #[test]
    fn corrupted_header_frame_or_crc_fails_decode(
        payload in prop::collection::vec(any::<u8>(), 0..32),
        idx in any::<prop::sample::Index>(),
        flip in 1u8..=255,
    ) {
        let msg = SecureMessage::receive(ReceiveFrame::new(SfdState::Ok, payload)).unwrap();
        let mut bytes = msg.encode();
        // Byte 0 is left alone: 0xFF -> 0x7F turns the state 0x00 into a
        // valid DEFAULT opcode.
        let i = 1 + idx.index(bytes.len() - 1);
        bytes[i] ^= flip;
        prop_assert!(SecureMessage::decode(&bytes).is_err());
    }
}
