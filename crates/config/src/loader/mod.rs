//! Configuration loading from the config file and environment variables.
//!
//! Responsibilities:
//! - Parse the line-oriented `key=value` config file format.
//! - Read environment variable overrides, ignoring empty values.
//! - Provide a builder-pattern `ConfigResolver` merging defaults, file, and environment.
//!
//! Does NOT handle:
//! - Validating the address as a URL.
//! - Writing configuration back to disk.
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over file values, which take precedence over defaults.
//! - Resolution never fails: unreadable files degrade to defaults.
//! - Every resolution reads the file and environment afresh.

mod env;
mod error;
mod file;
mod parse;
mod resolver;

pub use env::{EnvOverrides, env_var_or_none};
pub use error::ConfigError;
pub use file::{FileSource, read_config_file};
pub use parse::{FileValues, parse_config_str};
pub use resolver::{ConfigResolver, address_token_from_config, resolve, resolve_default};

#[cfg(test)]
mod tests;
