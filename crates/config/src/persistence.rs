//! Configuration file reading and writing.
//!
//! This module handles locating configuration files, loading them and
//! saving configuration back to disk.
//!
//! # File Formats
//!
//! - JSON5 (`.json5`): Preferred format with comments and trailing commas
//! - JSON (`.json`): Standard JSON format
//!
//! # File Locations
//!
//! Configuration is searched in the following order:
//!
//! 1. The path named by the `TASKLIST_CONFIG` environment variable (used
//!    even when missing, so loading reports the error)
//! 2. Local: `./tasklist.json5` or `./tasklist.json`
//! 3. User: `~/.config/tasklist/config.json5` or `~/.config/tasklist/config.json`

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConfigError, Result};

/// Environment variable that points at an explicit config file.
pub const CONFIG_ENV_VAR: &str = "TASKLIST_CONFIG";

/// Configuration file names to search for, in priority order.
const CONFIG_FILE_NAMES: &[&str] = &["tasklist.json5", "tasklist.json"];

/// User config directory name.
const USER_CONFIG_DIR: &str = "tasklist";

/// User config file names to search for, in priority order.
const USER_CONFIG_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Finds the configuration file path from the process environment.
///
/// Returns `Some(path)` if a config file is found, `None` otherwise.
///
/// # Examples
///
/// ```no_run
/// use tasklist_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let explicit = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    find_config_file_in(explicit, Path::new("."), dirs::config_dir())
}

/// Finds a configuration file given explicit search roots.
///
/// `explicit` is returned as is, even when the file is missing. Otherwise
/// `local_dir` is searched, then `user_config_root/tasklist`.
#[must_use]
pub fn find_config_file_in(
    explicit: Option<PathBuf>,
    local_dir: &Path,
    user_config_root: Option<PathBuf>,
) -> Option<PathBuf> {
    if explicit.is_some() {
        return explicit;
    }

    for name in CONFIG_FILE_NAMES {
        let path = local_dir.join(name);
        if path.exists() {
            return Some(path);
        }
    }

    let user_dir = user_config_root?.join(USER_CONFIG_DIR);
    USER_CONFIG_FILE_NAMES
        .iter()
        .map(|name| user_dir.join(name))
        .find(|path| path.exists())
}

/// Reads and parses a JSON5 or JSON file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The file content cannot be parsed
///
/// # Examples
///
/// ```no_run
/// use tasklist_config::persistence::read_config_file;
/// use tasklist_config::Config;
///
/// # fn main() -> tasklist_config::Result<()> {
/// let config: Config = read_config_file("tasklist.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    debug!(?path, "reading config file");
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    // JSON5 parser handles both JSON5 and JSON
    serde_json5::from_str(&content).map_err(ConfigError::from)
}

/// Writes a value to a file as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The file cannot be written
/// - The value cannot be serialized
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, config: &T) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty() && !p.exists()) {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let content = serde_json::to_string_pretty(config)?;

    std::fs::write(path, content).map_err(|e| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })
}
