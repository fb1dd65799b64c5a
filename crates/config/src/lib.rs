//! Client configuration for the Lassie API.
//!
//! This crate resolves the service address and API token used to construct
//! an API client, merging built-in defaults, the per-user `~/.lassie` file,
//! and the `LASSIE_ADDRESS`/`LASSIE_TOKEN` environment variables.
//!
//! Precedence is environment > file > defaults, and resolution never fails:
//!
//! ```no_run
//! use lassie_config::resolve_default;
//!
//! let config = resolve_default();
//! println!("connecting to {}", config.address());
//! ```

pub mod constants;
mod loader;
mod path;
pub mod source;
pub mod types;

pub use constants::{ADDRESS_ENV_VAR, CONFIG_FILE_NAME, DEFAULT_ADDRESS, TOKEN_ENV_VAR};
pub use loader::{
    ConfigError, ConfigResolver, EnvOverrides, FileSource, FileValues, address_token_from_config,
    env_var_or_none, parse_config_str, read_config_file, resolve, resolve_default,
};
pub use path::{config_file_path, default_config_path};
pub use source::{ConfigSource, DefaultSource, EnvironmentSource};
pub use types::ResolvedConfig;
