//! # Recorder Protocol
//!
//! Client-side protocol core for the AC35 "Game Recorder" binary stream.
//!
//! This crate builds outbound AC35 packets (fixed 15-byte header, variable
//! body, CRC32 trailer) and ships them to a local Game Recorder server over a
//! WebSocket connection.
//!
//! ## Components
//! - **Core**: packet encoding — header layout, little-endian integer
//!   packing, CRC32 framing
//! - **Protocol**: the message catalogue and per-message body encoders
//! - **Transport**: a thin WebSocket client with typed connection state
//! - **Config**: TOML/env configuration for the client and logging
//!
//! ## Wire Format
//! ```text
//! [Sync(2)] [Type(2, LE)] [Reserved(9)] [BodyLen(2, LE)] [Body(N)] [CRC32(4, LE)]
//! ```
//!
//! ## Example
//! ```no_run
//! use recorder_protocol::protocol::message::RequestGame;
//! use recorder_protocol::transport::websocket::RecorderClient;
//!
//! #[tokio::main]
//! async fn main() -> recorder_protocol::error::Result<()> {
//!     let mut client = RecorderClient::open("ws://127.0.0.1:2827").await?;
//!     client.send_message(&RequestGame { room_code: 1234 }).await?;
//!     client.close().await
//! }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod protocol;
pub mod transport;
pub mod utils;

pub use crate::core::packet::{Header, Packet};
pub use crate::error::{ProtocolError, Result};
pub use crate::protocol::message::{MessageType, RequestGame, WireMessage};
pub use crate::transport::websocket::{ConnectionState, RecorderClient};
