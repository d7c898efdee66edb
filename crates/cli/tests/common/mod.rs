//! Shared test utilities for scs-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//!
//! Invariants / Assumptions:
//! - Host `SCS_*` variables never leak into a test run.

use assert_cmd::Command;

/// Returns a hermetic `scs-cli` command for integration testing.
pub fn scs_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("scs-cli");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("SCS_BASE_URL")
        .env_remove("SCS_TIMEOUT")
        .env_remove("RUST_LOG");

    // An empty config file keeps the user's own config out of the run.
    let empty_config = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("empty_config.json");
    cmd.env("SCS_CONFIG_PATH", empty_config);

    cmd
}

/// Returns a hermetic `scs-cli` command targeting `base_url`.
#[allow(dead_code)]
pub fn scs_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = scs_cmd();
    cmd.env("SCS_BASE_URL", base_url);
    cmd
}
