//! Integration tests for configuration validation

#![allow(clippy::expect_used)]

use recorder_protocol::config::{RecorderConfig, DEFAULT_SERVER_URL, GAME_RECORDER_PORT};
use std::time::Duration;
use tracing::Level;

#[test]
fn test_default_config_validates() {
    let config = RecorderConfig::default();
    let errors = config.validate();
    assert!(
        errors.is_empty(),
        "Default config should be valid, but got errors: {:?}",
        errors
    );
}

#[test]
fn test_default_url_points_at_recorder_port() {
    assert_eq!(
        DEFAULT_SERVER_URL,
        format!("ws://127.0.0.1:{GAME_RECORDER_PORT}")
    );
}

#[test]
fn test_empty_server_url() {
    let mut config = RecorderConfig::default();
    config.client.server_url = String::new();

    let errors = config.validate();
    assert!(!errors.is_empty());
    assert!(errors.iter().any(|e| e.contains("cannot be empty")));
}

#[test]
fn test_non_websocket_scheme_rejected() {
    let mut config = RecorderConfig::default();
    config.client.server_url = "tcp://127.0.0.1:2827".to_string();

    let errors = config.validate();
    assert!(!errors.is_empty(), "Should have validation errors");
    assert!(errors.iter().any(|e| e.contains("Invalid server URL")));
}

#[test]
fn test_secure_websocket_scheme_accepted() {
    let mut config = RecorderConfig::default();
    config.client.server_url = "wss://recorder.example.com:2827".to_string();

    assert!(config.validate().is_empty());
}

#[test]
fn test_too_short_connect_timeout() {
    let mut config = RecorderConfig::default();
    config.client.connect_timeout = Duration::from_millis(10);

    let errors = config.validate();
    assert!(errors.iter().any(|e| e.contains("too short")));
}

#[test]
fn test_empty_app_name() {
    let mut config = RecorderConfig::default();
    config.logging.app_name = String::new();

    let errors = config.validate();
    assert!(errors
        .iter()
        .any(|e| e.contains("Application name cannot be empty")));
}

#[test]
fn test_validate_strict_aggregates_errors() {
    let mut config = RecorderConfig::default();
    config.client.server_url = String::new();
    config.logging.app_name = String::new();

    let err = config.validate_strict().expect_err("two invalid fields");
    let message = err.to_string();
    assert!(message.contains("Server URL"));
    assert!(message.contains("Application name"));
}

#[test]
fn test_env_overrides() {
    std::env::set_var("RECORDER_PROTOCOL_SERVER_URL", "ws://127.0.0.1:9999");
    std::env::set_var("RECORDER_PROTOCOL_CONNECT_TIMEOUT_MS", "1500");

    let config = RecorderConfig::from_env().expect("env config");
    assert_eq!(config.client.server_url, "ws://127.0.0.1:9999");
    assert_eq!(config.client.connect_timeout, Duration::from_millis(1500));

    std::env::remove_var("RECORDER_PROTOCOL_SERVER_URL");
    std::env::remove_var("RECORDER_PROTOCOL_CONNECT_TIMEOUT_MS");
}

#[test]
fn test_log_level_parsing() {
    let config = RecorderConfig::from_toml(
        "[logging]\napp_name = \"recorder-protocol\"\nlog_level = \"warn\"\nlog_to_console = true\njson_format = false\n",
    )
    .expect("valid toml");
    assert_eq!(config.logging.log_level, Level::WARN);
}
