//! # Core Protocol Components
//!
//! Low-level packet building for the AC35 Game Recorder protocol.
//!
//! This module provides the foundation for the protocol: the fixed header
//! layout, little-endian integer packing, and the CRC32 integrity trailer.
//!
//! ## Components
//! - **Packet**: assembled outbound packet (header + body + checksum)
//! - **Header**: fixed 15-byte header with sync bytes, message type, and
//!   body length
//!
//! ## Wire Format
//! ```text
//! [Sync(2)] [Type(2, LE)] [Reserved(9)] [BodyLen(2, LE)] [Body(N)] [CRC32(4, LE)]
//! ```
//!
//! All multi-byte integers are little-endian. The sync bytes `[71, 131]`
//! identify packets of this protocol family.

pub mod packet;
