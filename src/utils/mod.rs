//! # Utility Modules
//!
//! Supporting utilities used throughout the client.
//!
//! ## Components
//! - **Logging**: structured logging configuration

pub mod logging;
