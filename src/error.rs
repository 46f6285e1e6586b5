//! # Error Types
//!
//! Error handling for the recorder protocol client.
//!
//! Errors here are transport and configuration level only: packet encoding is
//! a pure function of its inputs and never fails. Out-of-range numeric values
//! truncate to the encoded width rather than raising an error (see
//! [`crate::core::packet::pack_int`]).
//!
//! All errors implement `std::error::Error` for interoperability.

use std::io;
use thiserror::Error;

/// Primary error type for all client operations.
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("Not connected to the Game Recorder")]
    NotConnected,

    #[error("Connection closed")]
    ConnectionClosed,

    #[error("Timeout occurred")]
    Timeout,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Custom error: {0}")]
    Custom(String),
}

/// Type alias for Results using ProtocolError
pub type Result<T> = std::result::Result<T, ProtocolError>;
