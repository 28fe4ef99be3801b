// ABOUTME: Environment loading tests for the application configuration
// ABOUTME: Covers logging variables, calculator variables, and strict-mode failures
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use cardioload::config::AppConfig;
use cardioload::logging::{LogFormat, LoggingConfig};
use cardioload_intelligence::config::{ConfigError, IntelligenceConfig};
use serial_test::serial;

const KEYS: [&str; 7] = [
    "RUST_LOG",
    "LOG_FORMAT",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_THREAD",
    "LOG_INCLUDE_SPANS",
    "CARDIOLOAD_ACUTE_WINDOW_DAYS",
    "CARDIOLOAD_LUCIA_DIVISOR",
];

fn clear() {
    for key in KEYS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear();
    let config = AppConfig::try_from_env().unwrap();

    assert_eq!(config.logging, LoggingConfig::default());
    assert_eq!(config.intelligence, IntelligenceConfig::default());
    assert_eq!(config.logging.format, LogFormat::Compact);
    assert_eq!(config.logging.service_name, "cardioload");
}

#[test]
#[serial]
fn test_logging_variables() {
    clear();
    env::set_var("RUST_LOG", "cardioload=debug");
    env::set_var("LOG_FORMAT", "JSON");
    env::set_var("LOG_INCLUDE_LOCATION", "1");
    env::set_var("LOG_INCLUDE_SPANS", "1");

    let logging = LoggingConfig::from_env();
    clear();

    assert_eq!(logging.level, "cardioload=debug");
    assert_eq!(logging.format, LogFormat::Json);
    assert!(logging.include_location);
    assert!(!logging.include_thread);
    assert!(logging.include_spans);
}

#[test]
#[serial]
fn test_unknown_log_format_falls_back_to_compact() {
    clear();
    env::set_var("LOG_FORMAT", "xml");
    let logging = LoggingConfig::from_env();
    clear();

    assert_eq!(logging.format, LogFormat::Compact);
}

#[test]
#[serial]
fn test_calculator_variables_flow_into_app_config() {
    clear();
    env::set_var("CARDIOLOAD_ACUTE_WINDOW_DAYS", "5");
    env::set_var("CARDIOLOAD_LUCIA_DIVISOR", "4.0");

    let config = AppConfig::try_from_env().unwrap();
    clear();

    assert_eq!(config.intelligence.workload.acute_window_days, 5);
    assert!((config.intelligence.normalization.lucia_divisor - 4.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_strict_loading_rejects_what_lenient_loading_ignores() {
    clear();
    env::set_var("CARDIOLOAD_ACUTE_WINDOW_DAYS", "a week");

    let lenient = AppConfig::from_env();
    let strict = AppConfig::try_from_env();
    clear();

    assert_eq!(lenient.intelligence.workload.acute_window_days, 7);
    assert!(matches!(strict, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_strict_loading_validates_ranges() {
    clear();
    env::set_var("CARDIOLOAD_ACUTE_WINDOW_DAYS", "60");

    let strict = AppConfig::try_from_env();
    clear();

    assert!(matches!(strict, Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_with_level_keeps_other_settings() {
    let logging = LoggingConfig {
        format: LogFormat::Pretty,
        ..LoggingConfig::default()
    }
    .with_level("trace");

    assert_eq!(logging.level, "trace");
    assert_eq!(logging.format, LogFormat::Pretty);
}
