//! AC35 message catalogue.
//!
//! Adding a message type means adding a [`MessageType`] variant and a struct
//! implementing [`WireMessage`] with its body encoder. Header and checksum
//! logic stay in `core::packet` untouched.

use crate::core::packet::{pack_int, Packet};

/// Wire type discriminator for AC35 messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    /// Ask the Game Recorder to replay a recorded game by room code.
    RequestGame,
    /// Catch-all for type values this client does not know.
    Unknown,
}

impl MessageType {
    /// The 16-bit type value written at header offset 2.
    pub fn value(self) -> u16 {
        match self {
            MessageType::RequestGame => 114,
            MessageType::Unknown => 0,
        }
    }

    /// Map a wire type value back to a known message type.
    pub fn from_value(value: u16) -> Self {
        match value {
            114 => MessageType::RequestGame,
            _ => MessageType::Unknown,
        }
    }
}

/// An outbound message that knows its wire type and how to encode its body.
pub trait WireMessage {
    /// The message's wire type.
    fn message_type(&self) -> MessageType;

    /// Encode the message-specific body bytes.
    fn encode_body(&self) -> Vec<u8>;

    /// Assemble the full packet: header, body, CRC trailer.
    fn to_packet(&self) -> Packet {
        Packet::new(self.message_type().value(), self.encode_body())
    }
}

/// Request a recorded game from the Game Recorder by room code.
///
/// Body is the room code as a 2-byte little-endian integer; the full packet
/// is 21 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestGame {
    pub room_code: u16,
}

impl WireMessage for RequestGame {
    fn message_type(&self) -> MessageType {
        MessageType::RequestGame
    }

    fn encode_body(&self) -> Vec<u8> {
        pack_int(i64::from(self.room_code), 2)
    }
}
