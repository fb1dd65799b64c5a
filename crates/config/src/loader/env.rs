//! Environment variable overrides for configuration.
//!
//! Responsibilities:
//! - Read override environment variables, treating empty values as unset.
//! - Name the pair of variables used to override address and token.
//!
//! Does NOT handle:
//! - Loading from the config file (see file.rs).
//! - Building the final ResolvedConfig (see resolver.rs).
//!
//! Invariants:
//! - Environment variables take precedence over file values.
//! - Empty environment variables are treated as unset.
//! - Non-empty values are returned verbatim (no trimming).
//! - Values that are not valid Unicode are treated as unset.

use crate::constants::{ADDRESS_ENV_VAR, TOKEN_ENV_VAR};

/// Read an environment variable, returning None if unset, empty, or not valid Unicode.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.is_empty())
}

/// Names of the environment variables that override the address and token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvOverrides {
    pub address_var: String,
    pub token_var: String,
}

impl Default for EnvOverrides {
    fn default() -> Self {
        Self::new(ADDRESS_ENV_VAR, TOKEN_ENV_VAR)
    }
}

impl EnvOverrides {
    /// Override pair using custom variable names.
    pub fn new(address_var: impl Into<String>, token_var: impl Into<String>) -> Self {
        Self {
            address_var: address_var.into(),
            token_var: token_var.into(),
        }
    }

    /// Current value of the address override, if set and non-empty.
    pub fn address(&self) -> Option<String> {
        env_var_or_none(&self.address_var)
    }

    /// Current value of the token override, if set and non-empty.
    pub fn token(&self) -> Option<String> {
        env_var_or_none(&self.token_var)
    }
}
