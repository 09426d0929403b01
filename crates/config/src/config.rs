//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the tasklist application.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tasklist_protocol::seed::{SeedEntry, default_seed};

use crate::error::{ConfigError, Result};
use crate::persistence::{find_config_file, read_config_file, write_config_file};
use crate::seed::load_seed_file;

/// Default tracing filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

/// The main configuration struct for the tasklist application.
///
/// # Examples
///
/// ```
/// use tasklist_config::Config;
///
/// let config = Config::default();
/// assert!(config.seed_file.is_none());
/// assert_eq!(config.log_filter, "info");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// File holding the initial tasks.
    ///
    /// When unset, the built-in seed list is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_file: Option<PathBuf>,

    /// File that receives log output.
    ///
    /// Logging is disabled when unset, since the terminal belongs to the UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    /// Tracing filter directive, e.g. `"info"` or `"tasklist_tui=debug"`.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Whether the help overlay is shown when the application starts.
    #[serde(default)]
    pub show_help_on_start: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_file: None,
            log_file: None,
            log_filter: default_log_filter(),
            show_help_on_start: false,
        }
    }
}

impl Config {
    /// Loads configuration from the default file locations.
    ///
    /// If no configuration file is found, returns a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed or validated. A path named by `TASKLIST_CONFIG` that
    /// does not exist is reported as [`ConfigError::ReadFile`].
    pub fn load() -> Result<Self> {
        Self::load_located(find_config_file())
    }

    fn load_located(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// A relative `seed_file` is resolved against the directory holding the
    /// configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tasklist_config::Config;
    ///
    /// # fn example() -> tasklist_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config: Config = read_config_file(path)?;
        if let Some(base) = path.parent() {
            config.seed_file = config
                .seed_file
                .take()
                .map(|seed| if seed.is_relative() { base.join(seed) } else { seed });
        }
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the log filter is blank or the seed file does
    /// not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use tasklist_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.log_filter = "  ".to_string();
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::InvalidLogFilter {
                reason: "filter cannot be empty".to_string(),
            });
        }
        if let Some(seed) = &self.seed_file
            && !seed.exists()
        {
            return Err(ConfigError::MissingSeedFile(seed.clone()));
        }
        Ok(())
    }

    /// Returns the seed entries the store should start from.
    ///
    /// # Errors
    ///
    /// Returns an error if a seed file is configured and cannot be loaded.
    pub fn seed_entries(&self) -> Result<Vec<SeedEntry>> {
        match &self.seed_file {
            Some(path) => load_seed_file(path),
            None => Ok(default_seed()),
        }
    }
}
