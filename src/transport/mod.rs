//! # Transport Layer
//!
//! WebSocket transport to the Game Recorder server.
//!
//! The transport owns the live connection and its lifecycle; packet encoding
//! lives in [`crate::core`] and makes no assumption about socket readiness.
//! Connection loss is reported, never retried automatically.

pub mod websocket;

pub use websocket::{ConnectionState, RecorderClient};
