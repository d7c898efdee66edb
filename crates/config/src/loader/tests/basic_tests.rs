//! Builder method tests for the configuration loader.

use std::time::Duration;

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::loader::builder::ConfigLoader;

#[test]
fn test_loader_defaults() {
    let config = ConfigLoader::new().build().unwrap();
    assert_eq!(config.connection.base_url, DEFAULT_BASE_URL);
    assert_eq!(
        config.connection.timeout,
        Duration::from_secs(DEFAULT_TIMEOUT_SECS)
    );
}

#[test]
fn test_loader_with_base_url() {
    let config = ConfigLoader::new()
        .with_base_url("http://localhost:8080".to_string())
        .build()
        .unwrap();
    assert_eq!(config.connection.base_url, "http://localhost:8080");
}

#[test]
fn test_loader_with_timeout() {
    let config = ConfigLoader::new()
        .with_timeout(Duration::from_secs(90))
        .build()
        .unwrap();
    assert_eq!(config.connection.timeout, Duration::from_secs(90));
}

#[test]
fn test_base_url_trailing_slash_removed() {
    let config = ConfigLoader::new()
        .with_base_url("https://catalog.example.com/".to_string())
        .build()
        .unwrap();
    assert_eq!(config.connection.base_url, "https://catalog.example.com");
}

#[test]
fn test_base_url_surrounding_whitespace_trimmed() {
    let config = ConfigLoader::new()
        .with_base_url("  https://catalog.example.com  ".to_string())
        .build()
        .unwrap();
    assert_eq!(config.connection.base_url, "https://catalog.example.com");
}
