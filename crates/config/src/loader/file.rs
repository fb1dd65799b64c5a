//! Config file loading.
//!
//! Responsibilities:
//! - Read the config file from disk.
//! - Provide `FileSource`, a file-backed `ConfigSource` that falls back to defaults.
//!
//! Does NOT handle:
//! - Line parsing (see parse.rs).
//! - Environment variable overrides (see env.rs).
//!
//! Invariants:
//! - A missing or unreadable file is not an error for `FileSource::load`; it yields defaults.
//! - Only I/O failures make a file unreadable; bytes that are not valid UTF-8 are
//!   decoded lossily so the remaining lines still parse.
//! - File contents are never logged.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::ConfigError;
use super::parse::{FileValues, parse_config_str};
use crate::constants::{DEFAULT_ADDRESS, DEFAULT_TOKEN};
use crate::path::default_config_path;
use crate::source::ConfigSource;

/// Read the config file at `path` into a string.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD. Line breaks are ASCII and
/// never part of an invalid sequence, so one bad byte only affects its own line.
pub fn read_config_file(path: &Path) -> Result<String, ConfigError> {
    let bytes = fs::read(path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Log a failure to load the config file. Missing files are routine.
pub(crate) fn log_load_failure(error: &ConfigError) {
    if error.is_not_found() {
        tracing::trace!(%error, "No config file, using defaults");
    } else {
        tracing::debug!(%error, "Ignoring unreadable config file, using defaults");
    }
}

/// Snapshot of the directives in a config file, with defaults for anything missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSource {
    path: Option<PathBuf>,
    values: FileValues,
}

impl FileSource {
    /// Load the config file at `path`, falling back to defaults if it cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::try_load(path).unwrap_or_else(|error| {
            log_load_failure(&error);
            Self {
                path: Some(path.to_path_buf()),
                values: FileValues::default(),
            }
        })
    }

    /// Load the default `~/.lassie` file, falling back to defaults.
    pub fn load_default() -> Self {
        match default_config_path() {
            Ok(path) => Self::load(path),
            Err(error) => {
                log_load_failure(&error);
                Self::default()
            }
        }
    }

    /// Load the config file at `path`, reporting read failures.
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = read_config_file(path)?;
        let values = parse_config_str(&contents);
        tracing::debug!(
            path = %path.display(),
            has_address = values.address.is_some(),
            has_token = values.token.is_some(),
            "Loaded config file"
        );
        Ok(Self {
            path: Some(path.to_path_buf()),
            values,
        })
    }

    /// The path this source was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The directives found in the file.
    pub fn values(&self) -> &FileValues {
        &self.values
    }
}

impl ConfigSource for FileSource {
    fn address(&self) -> String {
        self.values
            .address
            .clone()
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string())
    }

    fn token(&self) -> String {
        self.values
            .token
            .clone()
            .unwrap_or_else(|| DEFAULT_TOKEN.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join(".lassie");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_reads_values() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "address=http://example.com\ntoken=sometoken");

        let source = FileSource::load(&path);
        assert_eq!(source.path(), Some(path.as_path()));
        assert_eq!(source.address(), "http://example.com");
        assert_eq!(source.token(), "sometoken");
    }

    #[test]
    fn test_load_missing_address_uses_default() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "token=foobar\nsome=thing\nother=thing\n\n\n");

        let source = FileSource::load(&path);
        assert_eq!(source.address(), DEFAULT_ADDRESS);
        assert_eq!(source.token(), "foobar");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let source = FileSource::load(dir.path().join("does-not-exist"));
        assert!(source.values().is_empty());
        assert_eq!(source.address(), DEFAULT_ADDRESS);
        assert_eq!(source.token(), "");
    }

    #[test]
    fn test_try_load_reports_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = FileSource::try_load(dir.path().join("does-not-exist")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_load_directory_uses_defaults() {
        // Reading a directory as a file fails with something other than NotFound.
        let dir = TempDir::new().unwrap();
        let source = FileSource::load(dir.path());
        assert_eq!(source.address(), DEFAULT_ADDRESS);
        assert_eq!(source.token(), "");
    }

    #[test]
    fn test_load_keeps_directives_next_to_invalid_utf8_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".lassie");
        fs::write(&path, b"address=http://example.com\ntoken=sometoken\n# caf\xe9\n").unwrap();

        let source = FileSource::load(&path);
        assert_eq!(source.address(), "http://example.com");
        assert_eq!(source.token(), "sometoken");
    }

    #[test]
    fn test_load_decodes_invalid_utf8_directive_lossily() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".lassie");
        fs::write(&path, b"address=http://example.com\r\ntoken=ab\xffcd\r\n").unwrap();

        let source = FileSource::load(&path);
        assert_eq!(source.address(), "http://example.com");
        assert_eq!(source.token(), "ab\u{FFFD}cd");
    }
}
