//! Property-based tests using proptest
//!
//! These tests validate wire-format invariants across a wide range of
//! randomly generated inputs.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use proptest::prelude::*;
use recorder_protocol::core::packet::{
    checksum, pack_int, Header, Packet, CRC_LENGTH, HEADER_LENGTH, SYNC_BYTES,
};
use recorder_protocol::protocol::message::{RequestGame, WireMessage};

// Property: every header is 15 bytes, starts with the sync bytes, and
// carries type and body length little-endian at their fixed offsets
proptest! {
    #[test]
    fn prop_header_layout(message_type in any::<u16>(), body_len in any::<u16>()) {
        let header = Header::new(message_type, body_len);
        let bytes = header.as_bytes();

        prop_assert_eq!(bytes.len(), HEADER_LENGTH);
        prop_assert_eq!(&bytes[0..2], &SYNC_BYTES[..]);
        prop_assert_eq!(&bytes[2..4], &message_type.to_le_bytes()[..]);
        prop_assert_eq!(&bytes[4..13], &[0u8; 9][..]);
        prop_assert_eq!(&bytes[13..15], &body_len.to_le_bytes()[..]);
    }
}

// Property: pack_int emits exactly num_bytes bytes, matching the value's
// little-endian representation truncated to that width
proptest! {
    #[test]
    fn prop_pack_int_width_and_truncation(value in any::<i64>(), num_bytes in 0usize..8) {
        let packed = pack_int(value, num_bytes);

        prop_assert_eq!(packed.len(), num_bytes);
        prop_assert_eq!(&packed[..], &value.to_le_bytes()[..num_bytes]);
    }
}

// Property: the checksum is the LE encoding of the standard CRC-32 over
// header ++ body, and recomputation is deterministic
proptest! {
    #[test]
    fn prop_checksum_is_crc32_of_concatenation(
        header in prop::collection::vec(any::<u8>(), 0..64),
        body in prop::collection::vec(any::<u8>(), 0..512),
    ) {
        let joined = [header.as_slice(), body.as_slice()].concat();
        let expected = crc32fast::hash(&joined).to_le_bytes();

        prop_assert_eq!(checksum(&header, &body), expected);
        prop_assert_eq!(checksum(&header, &body), checksum(&header, &body));
    }
}

// Property: packet assembly preserves the header/body/crc framing for any
// message type and body
proptest! {
    #[test]
    fn prop_packet_framing(
        message_type in any::<u16>(),
        body in prop::collection::vec(any::<u8>(), 0..1024),
    ) {
        let packet = Packet::new(message_type, body.clone());
        let bytes = packet.to_bytes();

        prop_assert_eq!(bytes.len(), HEADER_LENGTH + body.len() + CRC_LENGTH);
        prop_assert_eq!(packet.header().message_type(), message_type);
        prop_assert_eq!(packet.header().body_len() as usize, body.len());
        prop_assert_eq!(&bytes[HEADER_LENGTH..HEADER_LENGTH + body.len()], &body[..]);

        let crc_start = bytes.len() - CRC_LENGTH;
        prop_assert_eq!(&bytes[crc_start..], &checksum(&bytes[..HEADER_LENGTH], &body)[..]);
    }
}

// Property: a request-game packet is always 21 bytes with the room code at
// offset 15, little-endian
proptest! {
    #[test]
    fn prop_request_game_packet(room_code in any::<u16>()) {
        let bytes = RequestGame { room_code }.to_packet().to_bytes();
        let expected_header = Header::new(114, 2);

        prop_assert_eq!(bytes.len(), 21);
        prop_assert_eq!(&bytes[..HEADER_LENGTH], &expected_header.as_bytes()[..]);
        prop_assert_eq!(&bytes[15..17], &room_code.to_le_bytes()[..]);
    }
}

// Property: packet serialization is deterministic
proptest! {
    #[test]
    fn prop_packet_serialization_deterministic(
        message_type in any::<u16>(),
        body in prop::collection::vec(any::<u8>(), 0..256),
    ) {
        let packet = Packet::new(message_type, body);
        prop_assert_eq!(packet.to_bytes(), packet.to_bytes());
    }
}
