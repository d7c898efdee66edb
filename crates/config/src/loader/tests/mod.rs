//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests that touch process-global state (env vars, cwd) use `serial_test`
//!   and `global_test_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod basic_tests;
pub mod validation_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// All `SCS_*` variables cleared, so host settings do not leak into tests.
pub fn cleared_env() -> [(&'static str, Option<&'static str>); 3] {
    [
        ("SCS_BASE_URL", None),
        ("SCS_TIMEOUT", None),
        ("SCS_CONFIG_PATH", None),
    ]
}
