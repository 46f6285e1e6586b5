//! # Protocol Layer
//!
//! The AC35 message catalogue and per-message body encoders.
//!
//! Each outbound message supplies a wire type constant and a body encoder;
//! header layout and checksum framing are shared and never change per
//! message (see [`crate::core::packet`]).

pub mod message;
