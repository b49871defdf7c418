//! Configuration for browsers
//!
//! A `BrowserConfig` is passed explicitly to [`Browser::new`](crate::browse::Browser::new);
//! the browser never looks settings up on its own. Hosts may build one in
//! code, or read it from a TOML file with `BROWSEKIT_*` environment
//! variables layered on top.

use std::path::{Path, PathBuf};
use std::time::Duration;

pub use config::ConfigError;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::paging::MAX_SEARCH_LIMIT;

/// Browser configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BrowserConfig {
    /// Results per page; 0 shows everything on one page
    pub search_limit: usize,

    /// Refresh while typing (debounced) instead of only on submit
    pub search_as_you_type: bool,

    /// Quiet period after the last keystroke before a refresh runs
    pub debounce_ms: u64,

    /// The available catalog never changes, so a loaded copy may be kept
    pub available_is_static: bool,

    /// Default left indent of rows and controls
    pub indent: f32,

    /// Default lower bound of the title column width
    pub title_min_width: f32,

    /// Default upper bound of the title column width
    pub title_max_width: f32,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            search_limit: 100,
            search_as_you_type: true,
            debounce_ms: 250,
            available_is_static: false,
            indent: 50.0,
            title_min_width: 100.0,
            title_max_width: 300.0,
        }
    }
}

impl BrowserConfig {
    /// Get the default path of the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("browsekit").join("config.toml"))
    }

    /// Load configuration from a TOML file
    ///
    /// A missing file yields the defaults (still subject to environment
    /// overrides).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let builder = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(Self::environment());
        builder.build()?.try_deserialize()
    }

    /// Parse configuration from a TOML string
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the string is not valid TOML or a value has
    /// the wrong type.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .add_source(Self::environment())
            .build()?
            .try_deserialize()
    }

    /// Serialize to pretty TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }

    /// Page size with the upper bound applied
    #[must_use]
    pub fn effective_search_limit(&self) -> usize {
        self.search_limit.min(MAX_SEARCH_LIMIT)
    }

    /// Debounce window as a `Duration`
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    fn environment() -> Environment {
        Environment::with_prefix("BROWSEKIT").try_parsing(true)
    }
}
