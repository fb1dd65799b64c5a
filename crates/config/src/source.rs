//! Configuration sources yielding an address and a token.
//!
//! Responsibilities:
//! - Define the `ConfigSource` capability consumed by API client constructors.
//! - Provide the built-in defaults and the environment-backed source.
//!
//! Does NOT handle:
//! - Config file parsing (see `loader/file.rs`).
//! - Merging sources by precedence (see `loader/resolver.rs`).
//!
//! Invariants:
//! - `DefaultSource` and `EnvironmentSource` never return an empty address.
//! - Sources are read-only; reading one never mutates process state.

use crate::constants::{ADDRESS_ENV_VAR, DEFAULT_ADDRESS, DEFAULT_TOKEN, TOKEN_ENV_VAR};
use crate::loader::env_var_or_none;

/// Something that can tell an API client where to connect and how to
/// authenticate.
pub trait ConfigSource {
    /// The endpoint address to use.
    fn address(&self) -> String;

    /// The API token to use. May be empty.
    fn token(&self) -> String;
}

impl<T: ConfigSource + ?Sized> ConfigSource for &T {
    fn address(&self) -> String {
        (**self).address()
    }

    fn token(&self) -> String {
        (**self).token()
    }
}

impl<T: ConfigSource + ?Sized> ConfigSource for Box<T> {
    fn address(&self) -> String {
        (**self).address()
    }

    fn token(&self) -> String {
        (**self).token()
    }
}

/// Built-in defaults: the public endpoint and no token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultSource;

impl ConfigSource for DefaultSource {
    fn address(&self) -> String {
        DEFAULT_ADDRESS.to_string()
    }

    fn token(&self) -> String {
        DEFAULT_TOKEN.to_string()
    }
}

/// Reads the address and token from environment variables at call time.
///
/// An unset or empty address variable yields [`DEFAULT_ADDRESS`]; an unset
/// or empty token variable yields an empty token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentSource {
    address_var: String,
    token_var: String,
}

impl Default for EnvironmentSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentSource {
    /// Source reading `LASSIE_ADDRESS` and `LASSIE_TOKEN`.
    pub fn new() -> Self {
        Self::with_vars(ADDRESS_ENV_VAR, TOKEN_ENV_VAR)
    }

    /// Source reading custom variable names.
    pub fn with_vars(address_var: impl Into<String>, token_var: impl Into<String>) -> Self {
        Self {
            address_var: address_var.into(),
            token_var: token_var.into(),
        }
    }

    /// Name of the address variable.
    pub fn address_var(&self) -> &str {
        &self.address_var
    }

    /// Name of the token variable.
    pub fn token_var(&self) -> &str {
        &self.token_var
    }
}

impl ConfigSource for EnvironmentSource {
    fn address(&self) -> String {
        env_var_or_none(&self.address_var).unwrap_or_else(|| DEFAULT_ADDRESS.to_string())
    }

    fn token(&self) -> String {
        env_var_or_none(&self.token_var).unwrap_or_else(|| DEFAULT_TOKEN.to_string())
    }
}
