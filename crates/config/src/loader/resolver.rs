//! Configuration resolver implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigResolver` for merging configuration sources.
//! - Merge built-in defaults, the config file, and environment overrides.
//! - Offer free-function entry points for the common cases.
//!
//! Does NOT handle:
//! - Environment variable reading (delegated to env.rs).
//! - Config file reading and parsing (delegated to file.rs and parse.rs).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over file values.
//! - File values take precedence over built-in defaults.
//! - Resolution always succeeds and reads file and environment afresh each call.

use std::path::{Path, PathBuf};

use super::env::EnvOverrides;
use super::file::{FileSource, log_load_failure};
use crate::path::{config_file_path, default_config_path};
use crate::source::ConfigSource;
use crate::types::ResolvedConfig;

/// Resolves the address and token from defaults, the config file and the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    config_path: Option<PathBuf>,
    env_overrides: EnvOverrides,
}

impl ConfigResolver {
    /// Create a resolver using `~/.lassie` and the `LASSIE_*` variables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the config file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Override the environment variable names.
    pub fn with_env_overrides(mut self, overrides: EnvOverrides) -> Self {
        self.env_overrides = overrides;
        self
    }

    /// The explicitly configured file path, if any.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// The environment variable names consulted for overrides.
    pub fn env_overrides(&self) -> &EnvOverrides {
        &self.env_overrides
    }

    /// Resolve the configuration. Never fails.
    pub fn resolve(&self) -> ResolvedConfig {
        let path = match &self.config_path {
            Some(path) => Some(path.clone()),
            None => default_config_path()
                .inspect_err(log_load_failure)
                .ok(),
        };
        resolve(path.as_deref(), &self.env_overrides)
    }
}

/// Resolve the configuration from an optional config file and environment overrides.
///
/// A missing or unreadable file behaves like an empty one. Environment
/// variables that are set to a non-empty value win over the file.
pub fn resolve(config_file_path: Option<&Path>, overrides: &EnvOverrides) -> ResolvedConfig {
    let file = config_file_path.map(FileSource::load).unwrap_or_default();

    let mut address = file.address();
    let mut token = file.token();

    if let Some(value) = overrides.address() {
        tracing::debug!(var = %overrides.address_var, "Address overridden by environment");
        address = value;
    }
    if let Some(value) = overrides.token() {
        tracing::debug!(var = %overrides.token_var, "Token overridden by environment");
        token = value;
    }

    ResolvedConfig::new(address, token)
}

/// Resolve using `~/.lassie` and the `LASSIE_ADDRESS`/`LASSIE_TOKEN` variables.
pub fn resolve_default() -> ResolvedConfig {
    ConfigResolver::new().resolve()
}

/// Resolve `(address, token)` from a config file name and the standard variables.
///
/// Relative names are looked up in the home directory; absolute paths are
/// used as-is.
pub fn address_token_from_config(file_name: impl AsRef<Path>) -> (String, String) {
    let path = config_file_path(file_name)
        .inspect_err(log_load_failure)
        .ok();
    resolve(path.as_deref(), &EnvOverrides::default()).into_parts()
}
