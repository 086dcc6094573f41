// ABOUTME: Tests for logging configuration parsing
// ABOUTME: Validates log format selection and environment-driven logging settings
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use ride_outfit::constants::service_names;
use ride_outfit::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

const LOGGING_VARS: [&str; 5] = [
    "RUST_LOG",
    "LOG_FORMAT",
    "SERVICE_NAME",
    "ENVIRONMENT",
    "LOG_INCLUDE_LOCATION",
];

fn clear_logging_env() {
    for var in LOGGING_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_env_value(Some("json")), LogFormat::Json);
    assert_eq!(LogFormat::from_env_value(Some(" COMPACT ")), LogFormat::Compact);
    assert_eq!(LogFormat::from_env_value(Some("fancy")), LogFormat::Pretty);
    assert_eq!(LogFormat::from_env_value(None), LogFormat::Pretty);
}

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();
    assert_eq!(config.service_name, service_names::RIDE_OUTFIT);
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.level, "warn");
    assert!(!config.include_location);
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_logging_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("SERVICE_NAME", "outfit-batch");

    let config = LoggingConfig::from_env();
    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.service_name, "outfit-batch");
    assert!(!config.include_location);

    clear_logging_env();
}

#[test]
#[serial]
fn test_production_enables_detailed_logging() {
    clear_logging_env();
    env::set_var("ENVIRONMENT", "production");

    let config = LoggingConfig::from_env();
    assert!(config.include_location);
    assert!(config.include_thread);
    assert!(config.include_spans);
    assert_eq!(config.format, LogFormat::Compact);

    clear_logging_env();
}
