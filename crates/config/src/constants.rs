//! Centralized constants for the Lassie client configuration.
//!
//! Default values and well-known names shared by the sources and the
//! resolver, kept in one place to avoid string duplication.

// =============================================================================
// Defaults
// =============================================================================

/// Default API endpoint used when neither the config file nor the
/// environment provide an address.
pub const DEFAULT_ADDRESS: &str = "https://api.lora.telenor.io";

/// Default API token (no token).
pub const DEFAULT_TOKEN: &str = "";

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable overriding the resolved address.
pub const ADDRESS_ENV_VAR: &str = "LASSIE_ADDRESS";

/// Environment variable overriding the resolved token.
pub const TOKEN_ENV_VAR: &str = "LASSIE_TOKEN";

// =============================================================================
// Config File
// =============================================================================

/// Name of the per-user configuration file, relative to the home directory.
pub const CONFIG_FILE_NAME: &str = ".lassie";

/// Recognized directive key for the address.
pub(crate) const ADDRESS_KEY: &str = "address";

/// Recognized directive key for the token.
pub(crate) const TOKEN_KEY: &str = "token";
