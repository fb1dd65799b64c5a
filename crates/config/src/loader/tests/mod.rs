//! Tests for the configuration resolver.
//!
//! Responsibilities:
//! - Test file-only resolution and default fallback.
//! - Test environment variable precedence over the file.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::{Path, PathBuf};
use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Write a `.lassie` config file with the given contents into `dir`.
pub fn create_test_config_file(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join(".lassie");
    std::fs::write(&path, contents).unwrap();
    path
}

/// Environment with both override variables unset.
pub const UNSET_OVERRIDES: [(&str, Option<&str>); 2] =
    [("LASSIE_ADDRESS", None), ("LASSIE_TOKEN", None)];
