//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Describe the ways locating or reading the config file can fail.
//!
//! Does NOT handle:
//! - Recovering from failures; the resolver degrades every error to defaults.
//!
//! Invariants:
//! - Variants carry the path or reason for debugging.
//! - Errors never include file contents, which may hold a token.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating or reading the config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to determine home directory: {0}")]
    HomeDirUnavailable(String),

    #[error("Failed to read config file at {path}: {source}")]
    ConfigFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// True if the error only means the config file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConfigError::ConfigFileRead { source, .. } if source.kind() == ErrorKind::NotFound
        )
    }
}
