//! Validation tests for the configuration loader builder.

use std::time::Duration;

use crate::constants::MAX_TIMEOUT_SECS;
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

#[test]
fn test_timeout_zero_invalid() {
    let result = ConfigLoader::new()
        .with_timeout(Duration::from_secs(0))
        .build();

    match result {
        Err(ConfigError::InvalidTimeout { message }) => {
            assert!(
                message.contains("must be greater than 0"),
                "Expected message about timeout > 0, got: {}",
                message
            );
        }
        other => panic!("Expected InvalidTimeout error, got {:?}", other),
    }
}

#[test]
fn test_timeout_exceeds_max_invalid() {
    let result = ConfigLoader::new()
        .with_timeout(Duration::from_secs(MAX_TIMEOUT_SECS + 1))
        .build();

    match result {
        Err(ConfigError::InvalidTimeout { message }) => {
            assert!(message.contains("exceeds maximum"), "got: {}", message);
        }
        other => panic!("Expected InvalidTimeout error, got {:?}", other),
    }
}

#[test]
fn test_timeout_at_max_valid() {
    let config = ConfigLoader::new()
        .with_timeout(Duration::from_secs(MAX_TIMEOUT_SECS))
        .build()
        .unwrap();
    assert_eq!(config.connection.timeout.as_secs(), MAX_TIMEOUT_SECS);
}

#[test]
fn test_blank_base_url_is_missing() {
    let result = ConfigLoader::new().with_base_url("   ".to_string()).build();
    assert!(matches!(result, Err(ConfigError::MissingBaseUrl)));
}

#[test]
fn test_relative_base_url_rejected() {
    let result = ConfigLoader::new()
        .with_base_url("app.sendcutsend.com".to_string())
        .build();
    assert!(matches!(
        result,
        Err(ConfigError::InvalidValue { ref var, .. }) if var == "base_url"
    ));
}

#[test]
fn test_non_http_scheme_rejected() {
    let result = ConfigLoader::new()
        .with_base_url("ftp://catalog.example.com".to_string())
        .build();

    match result {
        Err(ConfigError::InvalidValue { message, .. }) => {
            assert!(message.contains("ftp"), "got: {}", message);
        }
        other => panic!("Expected InvalidValue error, got {:?}", other),
    }
}
