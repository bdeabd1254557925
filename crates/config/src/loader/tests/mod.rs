//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod env_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable the loader reads, cleared so ambient shell config cannot leak in.
pub const CLEARED_VARS: [(&str, Option<&str>); 5] = [
    ("ADTIMELINE_CONFIG_PATH", None),
    ("ADTIMELINE_THEME", None),
    ("ADTIMELINE_MOUSE", None),
    ("ADTIMELINE_TOUCH", None),
    ("ADTIMELINE_SWIPE_THRESHOLD", None),
];

/// `CLEARED_VARS` with the given variables set instead of cleared.
pub fn vars_with<'a>(overrides: &[(&'a str, Option<&'a str>)]) -> Vec<(&'a str, Option<&'a str>)> {
    let mut vars: Vec<(&str, Option<&str>)> = CLEARED_VARS
        .iter()
        .filter(|(k, _)| !overrides.iter().any(|(o, _)| o == k))
        .copied()
        .collect();
    vars.extend_from_slice(overrides);
    vars
}
