//! Path helpers for the config file location.
//!
//! Responsibilities:
//! - Determine the user's home directory.
//! - Resolve config file names against the home directory.
//! - Use `directories` crate for platform-appropriate paths.
//!
//! Does NOT handle:
//! - File I/O operations.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::constants::CONFIG_FILE_NAME;
use crate::loader::ConfigError;

/// Returns the current user's home directory.
pub(crate) fn home_dir() -> Result<PathBuf, anyhow::Error> {
    let base_dirs =
        directories::BaseDirs::new().context("Failed to determine user base directories")?;

    Ok(base_dirs.home_dir().to_path_buf())
}

/// Returns the default path to the configuration file: `~/.lassie`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    config_file_path(CONFIG_FILE_NAME)
}

/// Resolve a config file name.
///
/// Absolute paths are returned unchanged; relative names are taken to be
/// relative to the home directory.
pub fn config_file_path(name: impl AsRef<Path>) -> Result<PathBuf, ConfigError> {
    let name = name.as_ref();
    if name.is_absolute() {
        return Ok(name.to_path_buf());
    }

    let home = home_dir().map_err(|e| ConfigError::HomeDirUnavailable(format!("{:#}", e)))?;
    Ok(home.join(name))
}
