//! Resolved configuration type.
//!
//! Responsibilities:
//! - Hold the final `(address, token)` pair handed to the API client.
//! - Keep the token out of `Debug` output.
//!
//! Invariants:
//! - Values are immutable once resolved; a new value is produced per resolution.
//! - The token is stored as `secrecy::SecretString` to prevent accidental logging.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::source::ConfigSource;

/// The address and token used to construct an API client.
#[derive(Clone)]
pub struct ResolvedConfig {
    address: String,
    token: SecretString,
}

impl ResolvedConfig {
    /// Create a resolved configuration from plain values.
    pub fn new(address: impl Into<String>, token: impl Into<String>) -> Self {
        let token: String = token.into();
        Self {
            address: address.into(),
            token: SecretString::new(token.into()),
        }
    }

    /// The resolved address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The resolved token, exposed.
    pub fn token(&self) -> &str {
        self.token.expose_secret()
    }

    /// Consume into the `(address, token)` pair.
    pub fn into_parts(self) -> (String, String) {
        let token = self.token.expose_secret().to_string();
        (self.address, token)
    }
}

impl fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("address", &self.address)
            .field(
                "token",
                &if self.token().is_empty() {
                    "<empty>"
                } else {
                    "<redacted>"
                },
            )
            .finish()
    }
}

impl PartialEq for ResolvedConfig {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address && self.token() == other.token()
    }
}

impl Eq for ResolvedConfig {}

impl ConfigSource for ResolvedConfig {
    fn address(&self) -> String {
        self.address.clone()
    }

    fn token(&self) -> String {
        self.token.expose_secret().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let config = ResolvedConfig::new("http://example.com", "supersecret");
        let debug = format!("{:?}", config);
        assert!(debug.contains("http://example.com"));
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("supersecret"));
    }

    #[test]
    fn test_debug_marks_empty_token() {
        let config = ResolvedConfig::new("http://example.com", "");
        assert!(format!("{:?}", config).contains("<empty>"));
    }

    #[test]
    fn test_equality_compares_exposed_token() {
        let a = ResolvedConfig::new("http://example.com", "t1");
        let b = ResolvedConfig::new("http://example.com", "t1");
        let c = ResolvedConfig::new("http://example.com", "t2");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_into_parts() {
        let config = ResolvedConfig::new("http://example.com", "sometoken");
        assert_eq!(
            config.into_parts(),
            ("http://example.com".to_string(), "sometoken".to_string())
        );
    }
}
