//! AC35 packet encoding.
//!
//! An outbound packet is `Header(15) ++ Body(N) ++ Crc(4)`. The header starts
//! with the sync bytes `[71, 131]`, carries the message type at offset 2 and
//! the body length at offset 13, both as 2-byte little-endian integers. The
//! trailer is the CRC-32 (IEEE) of header and body, little-endian.
//!
//! Encoding never fails: values wider than their encoded field truncate to
//! the low bits, exactly as the wire format's original packer did. Callers
//! that need strict ranges get them from the `u16` parameters on [`Header`]
//! and the message builders, not from runtime checks here.

use bytes::{BufMut, Bytes, BytesMut};

/// Fixed header size in bytes.
pub const HEADER_LENGTH: usize = 15;

/// CRC trailer size in bytes.
pub const CRC_LENGTH: usize = 4;

/// Sync bytes identifying packets of this protocol family.
pub const SYNC_BYTES: [u8; 2] = [71, 131];

/// Header offset of the 2-byte message type field.
const TYPE_OFFSET: usize = 2;

/// Header offset of the 2-byte body length field.
const BODY_LENGTH_OFFSET: usize = 13;

/// Little-endian packing of an integer into exactly `num_bytes` bytes.
///
/// Byte `i` is `(value >> (8 * i)) & 0xFF`. Values wider than the requested
/// width lose their high bits; negative values emit two's complement bytes.
/// This truncation is part of the wire contract, not an error.
pub fn pack_int(value: i64, num_bytes: usize) -> Vec<u8> {
    (0..num_bytes)
        .map(|i| {
            // Shift capped at 63 so widths past 8 bytes repeat the sign byte.
            let shift = (8 * i).min(63) as u32;
            (value >> shift) as u8
        })
        .collect()
}

/// CRC-32 (IEEE) over `header ++ body`, little-endian encoded.
pub fn checksum(header: &[u8], body: &[u8]) -> [u8; CRC_LENGTH] {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(header);
    hasher.update(body);
    hasher.finalize().to_le_bytes()
}

/// Fixed 15-byte AC35 packet header.
///
/// Reserved bytes (4..13) stay zero; the server ignores them on this path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header([u8; HEADER_LENGTH]);

impl Header {
    /// Build a header for a message of the given type and body length.
    pub fn new(message_type: u16, body_len: u16) -> Self {
        let mut bytes = [0u8; HEADER_LENGTH];
        bytes[0] = SYNC_BYTES[0];
        bytes[1] = SYNC_BYTES[1];
        bytes[TYPE_OFFSET..TYPE_OFFSET + 2].copy_from_slice(&message_type.to_le_bytes());
        bytes[BODY_LENGTH_OFFSET..BODY_LENGTH_OFFSET + 2].copy_from_slice(&body_len.to_le_bytes());
        Self(bytes)
    }

    /// The raw header bytes.
    pub fn as_bytes(&self) -> &[u8; HEADER_LENGTH] {
        &self.0
    }

    /// The message type carried at offset 2.
    pub fn message_type(&self) -> u16 {
        u16::from_le_bytes([self.0[TYPE_OFFSET], self.0[TYPE_OFFSET + 1]])
    }

    /// The body length carried at offset 13.
    pub fn body_len(&self) -> u16 {
        u16::from_le_bytes([self.0[BODY_LENGTH_OFFSET], self.0[BODY_LENGTH_OFFSET + 1]])
    }
}

impl AsRef<[u8]> for Header {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// An assembled outbound packet. Immutable once constructed.
///
/// The checksum is computed at construction; `Header[13..15]` always matches
/// the body length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    header: Header,
    body: Vec<u8>,
    crc: [u8; CRC_LENGTH],
}

impl Packet {
    /// Assemble a packet: build the header, then checksum header and body.
    pub fn new(message_type: u16, body: Vec<u8>) -> Self {
        let header = Header::new(message_type, body.len() as u16);
        let crc = checksum(header.as_bytes(), &body);
        Self { header, body, crc }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn crc(&self) -> &[u8; CRC_LENGTH] {
        &self.crc
    }

    /// Total size on the wire.
    pub fn wire_len(&self) -> usize {
        HEADER_LENGTH + self.body.len() + CRC_LENGTH
    }

    /// Serialize to the wire byte sequence `header ++ body ++ crc`.
    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.wire_len());
        buf.put_slice(self.header.as_bytes());
        buf.put_slice(&self.body);
        buf.put_slice(&self.crc);
        buf.freeze()
    }
}
