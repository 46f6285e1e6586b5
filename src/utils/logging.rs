//! Structured logging setup.
//!
//! Initializes a `tracing` subscriber from [`LoggingConfig`]. `RUST_LOG`
//! overrides the configured level when set.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{ProtocolError, Result};

/// Install the global tracing subscriber.
///
/// Fails if a subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string().to_lowercase()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    // Console is the only output; disabling it swaps in a sink writer.
    let result = match (config.log_to_console, config.json_format) {
        (false, _) => builder.with_writer(std::io::sink).try_init(),
        (true, true) => builder.json().try_init(),
        (true, false) => builder.try_init(),
    };

    result.map_err(|e| ProtocolError::Custom(format!("Failed to set logging subscriber: {e}")))
}
