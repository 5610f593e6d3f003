//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find an mdsplit.toml, and if present we load settings from there.
//! This provides the default heading level, output directory and file extension.

use facet::Facet;
use std::fs;
use std::path::Path;

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "mdsplit.toml";

const DEFAULT_TAG: &str = "h2";
const DEFAULT_OUTPUT: &str = "split_markdown";
const DEFAULT_EXTENSION: &str = "md";

#[derive(Facet, Clone, Debug, PartialEq, Eq)]
/// User preferences loaded from mdsplit.toml or falling back to defaults.
pub struct Config {
    #[facet(default = DEFAULT_TAG.to_string())]
    /// Heading level token to split on when `--tag` is not given.
    pub tag: String,
    #[facet(default = DEFAULT_OUTPUT.to_string())]
    /// Destination directory when `--output` is not given.
    pub output: String,
    #[facet(default = DEFAULT_EXTENSION.to_string())]
    /// Extension appended to each written file.
    pub extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG.to_string(),
            output: DEFAULT_OUTPUT.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from mdsplit.toml in the working directory if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, using defaults if it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        Self::from_toml(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config");
            Self::default()
        })
    }

    /// Parse a TOML string, filling in defaults for absent keys.
    ///
    /// # Errors
    ///
    /// Returns the parser's message if `contents` is not valid config TOML.
    pub fn from_toml(contents: &str) -> Result<Self, String> {
        facet_toml::from_str::<Self>(contents).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
