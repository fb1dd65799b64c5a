//! Parser for the `key=value` config file format.
//!
//! Responsibilities:
//! - Extract `address` and `token` directives from config file text.
//!
//! Does NOT handle:
//! - Reading the file from disk (see file.rs).
//! - Falling back to defaults (see file.rs and resolver.rs).
//!
//! Invariants:
//! - Lines are split on the first `=` only; values may contain `=`.
//! - Keys are trimmed and matched case-insensitively; values are trimmed.
//! - Lines without `=`, blank lines, and unknown keys are ignored.
//! - The last occurrence of a recognized key wins.

use crate::constants::{ADDRESS_KEY, TOKEN_KEY};

/// Directives found in a config file.
///
/// `None` means the file had no line for that key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileValues {
    pub address: Option<String>,
    pub token: Option<String>,
}

impl FileValues {
    /// True if the file contained no recognized directive.
    pub fn is_empty(&self) -> bool {
        self.address.is_none() && self.token.is_none()
    }
}

/// Parse config file contents into the recognized directives.
///
/// Never fails: malformed lines are skipped.
pub fn parse_config_str(contents: &str) -> FileValues {
    let mut values = FileValues::default();

    // `lines()` also strips a trailing `\r`.
    for line in contents.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        let key = key.trim().to_lowercase();
        let slot = match key.as_str() {
            ADDRESS_KEY => &mut values.address,
            TOKEN_KEY => &mut values.token,
            _ => continue,
        };
        *slot = Some(value.trim().to_string());
    }

    values
}
