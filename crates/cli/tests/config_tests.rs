//! Configuration resolution through the CLI.

mod common;

use common::scs_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn version_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/app_version"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"data": {"version": "1.2.3"}})),
        )
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_base_url_from_config_file() {
    let server = version_server().await;
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.json");
    fs::write(
        &config_path,
        serde_json::json!({"base_url": server.uri(), "timeout_seconds": 5}).to_string(),
    )
    .unwrap();

    scs_cmd()
        .arg("--config-path")
        .arg(&config_path)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.2.3"));
}

#[tokio::test]
async fn test_flag_overrides_config_file() {
    let server = version_server().await;
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.json");
    fs::write(
        &config_path,
        serde_json::json!({"base_url": "http://127.0.0.1:1"}).to_string(),
    )
    .unwrap();

    scs_cmd()
        .arg("--config-path")
        .arg(&config_path)
        .args(["--base-url", &server.uri(), "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.2.3"));
}

#[test]
fn test_missing_explicit_config_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    scs_cmd()
        .arg("--config-path")
        .arg(temp_dir.path().join("absent.json"))
        .arg("version")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load configuration file"));
}

#[test]
fn test_invalid_base_url_fails() {
    scs_cmd()
        .args(["--base-url", "ftp://example.com", "version"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to build configuration"));
}

#[test]
fn test_timeout_out_of_range_fails() {
    scs_cmd()
        .args(["--timeout", "0", "version"])
        .assert()
        .code(1);
}
