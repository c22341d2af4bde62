//! Configuration file reading and writing, and default file locations.
//!
//! # File Formats
//!
//! Configuration files may be JSON5 (`.json5`, with comments and trailing
//! commas) or plain JSON (`.json`). Files are always written as JSON.
//!
//! # File Locations
//!
//! Configuration is searched in the following order:
//!
//! 1. Local: `./adventure-widget.json5` or `./adventure-widget.json`
//! 2. User: `~/.config/adventure-widget/config.json5` or `~/.config/adventure-widget/config.json`
//!
//! The persisted store and the host log live in the platform data directory
//! (`~/.local/share/adventure-widget/` on Linux).

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Configuration file names to search for, in priority order.
const CONFIG_FILE_NAMES: &[&str] = &["adventure-widget.json5", "adventure-widget.json"];

/// Directory name used under the platform config and data directories.
const APP_DIR: &str = "adventure-widget";

/// User config file names to search for, in priority order.
const USER_CONFIG_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// File name of the persisted key/value store the application writes.
pub const STORE_FILE_NAME: &str = "HomeWidgetPreferences.json";

/// File name of the host log.
pub const LOG_FILE_NAME: &str = "host.log";

/// Finds the configuration file path.
///
/// Returns `Some(path)` for the first existing candidate, `None` otherwise.
///
/// # Examples
///
/// ```no_run
/// use adventure_widget_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let local = CONFIG_FILE_NAMES.iter().map(PathBuf::from);
    let user = user_config_dir()
        .map(|dir| {
            USER_CONFIG_FILE_NAMES
                .iter()
                .map(|name| dir.join(name))
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    let found = local.chain(user).find(|path| path.exists());
    if let Some(path) = &found {
        tracing::debug!(path = %path.display(), "found config file");
    }
    found
}

/// Returns the default user configuration directory.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn user_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join(APP_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Returns the platform data directory for the widget.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Returns the default location of the persisted store.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
///
/// # Examples
///
/// ```no_run
/// use adventure_widget_config::persistence::default_store_path;
///
/// let path = default_store_path().unwrap();
/// assert!(path.ends_with("HomeWidgetPreferences.json"));
/// ```
pub fn default_store_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(STORE_FILE_NAME))
}

/// Returns the default location of the host log file.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_log_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(LOG_FILE_NAME))
}

/// Reads and parses a configuration file.
///
/// Supports both JSON5 and JSON formats.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The file content cannot be parsed
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    // JSON5 parser handles both JSON5 and JSON
    serde_json5::from_str(&content).map_err(ConfigError::from)
}

/// Writes a configuration to a file as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The file cannot be written
/// - The configuration cannot be serialized
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, config: &T) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.exists()) {
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
