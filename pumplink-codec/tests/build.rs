use pumplink_codec::consts::{CRC_INITIAL, CRC_POLYNOMIAL};
use pumplink_codec::{
    BuildErrorKind, PumpAction, RawAction, SendMessageType, build_command_envelope,
    build_send_inner, crc16_ccitt,
};

fn build_command<const N: usize>(action: &RawAction<N>, payload: &[u8]) -> Vec<u8> {
    let mut buf = [0u8; 512];
    let n = build_command_envelope(action, payload, &mut buf).unwrap();
    buf[..n].to_vec()
}

#[test]
fn command_envelope_layout() {
    let action = RawAction([0x51, 0x03]);
    let out = build_command(&action, &[0xDE, 0xAD]);

    assert_eq!(out.len(), 2 + 1 + 2 + 2);
    assert_eq!(&out[..2], &[0x51, 0x03]);
    assert_eq!(out[2], 5);
    assert_eq!(&out[3..5], &[0xDE, 0xAD]);

    let crc = crc16_ccitt(&out[..5], CRC_INITIAL, CRC_POLYNOMIAL);
    assert_eq!(&out[5..], &crc.to_le_bytes());
}

#[test]
fn command_envelope_checksum_is_little_endian() {
    let mut buf = [0u8; 8];
    let n = build_command_envelope(&PumpAction::PumpRequest, &[1, 2, 3], &mut buf).unwrap();
    // checksum 0xEF2F
    assert_eq!(&buf[n - 2..n], &[0x2F, 0xEF]);
}

#[test]
fn command_envelope_writes_only_its_prefix() {
    let mut buf = [0xCCu8; 16];
    let n = build_command_envelope(&PumpAction::NoType, &[0x01], &mut buf).unwrap();
    assert_eq!(n, 5);
    assert!(buf[n..].iter().all(|&b| b == 0xCC));
}

#[test]
fn command_envelope_oversized_header_leaves_no_room() {
    let action = RawAction([0u8; 254]);
    let mut buf = [0u8; 512];
    assert!(build_command_envelope(&action, &[], &mut buf).is_ok());
    let err = build_command_envelope(&action, &[0x00], &mut buf).unwrap_err();
    assert_eq!(err.kind, BuildErrorKind::PayloadTooLarge);
}

#[test]
fn send_inner_uses_big_endian_opcode_and_checksum() {
    let mut buf = [0u8; 16];
    let n = build_send_inner(SendMessageType::BeginEhsmSession, &[], &mut buf).unwrap();
    assert_eq!(&buf[..n], &[0x80, 0x04, 0x12, 0x09, 0x71]);
}

#[test]
fn session_begin_and_end_share_opcode_but_not_tag() {
    let mut begin = [0u8; 8];
    let mut end = [0u8; 8];
    build_send_inner(SendMessageType::BeginEhsmSession, &[], &mut begin).unwrap();
    build_send_inner(SendMessageType::EndEhsmSession, &[], &mut end).unwrap();

    assert_eq!(&begin[1..3], &end[1..3]);
    assert_eq!(begin[0], 0x80);
    assert_eq!(end[0], 0x00);
    assert_ne!(&begin[3..5], &end[3..5]);
}

#[test]
fn message_tag_table() {
    let table = [
        (SendMessageType::NoType, 0x00),
        (SendMessageType::BeginEhsmSession, 0x80),
        (SendMessageType::TimeRequest, 0x02),
        (SendMessageType::ReadPumpStatusRequest, 0x03),
        (SendMessageType::ReadBasalPatternRequest, 0x00),
        (SendMessageType::EndEhsmSession, 0x00),
    ];
    for (message_type, tag) in table {
        assert_eq!(message_type.message_tag(), tag, "{message_type:?}");
    }
}

#[test]
fn opcode_table() {
    assert_eq!(SendMessageType::NoType.opcode(), 0x0000);
    assert_eq!(SendMessageType::BeginEhsmSession.opcode(), 0x0412);
    assert_eq!(SendMessageType::TimeRequest.opcode(), 0x0403);
    assert_eq!(SendMessageType::ReadPumpStatusRequest.opcode(), 0x0112);
    assert_eq!(SendMessageType::ReadBasalPatternRequest.opcode(), 0x0112);
    assert_eq!(SendMessageType::EndEhsmSession.opcode(), 0x0412);

    assert!(SendMessageType::EndEhsmSession.matches_opcode(0x0412));
    assert!(SendMessageType::BeginEhsmSession.matches_opcode(0x0412));
    assert!(!SendMessageType::TimeRequest.matches_opcode(0x0412));
}

#[test]
fn pump_action_codes() {
    assert_eq!(PumpAction::NoType.code(), 0x00);
    assert_eq!(PumpAction::ChannelNegotiate.code(), 0x03);
    assert_eq!(PumpAction::PumpRequest.code(), 0x05);
    assert_eq!(PumpAction::PumpResponse.code(), 0x55);
}
