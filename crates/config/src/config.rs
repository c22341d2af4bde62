//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the widget host.

use std::path::{Path, PathBuf};

use adventure_widget_protocol::{SELECTED_LIST_KEY, WidgetId};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::persistence::{default_store_path, find_config_file, read_config_file, write_config_file};
use crate::refresh::RefreshConfig;
use crate::store::KeyValueStore;

/// Smallest number of widget instances a host renders.
pub const MIN_INSTANCES: u8 = 1;

/// Largest number of widget instances a host renders.
pub const MAX_INSTANCES: u8 = 8;

/// The main configuration struct for the widget host.
///
/// # Examples
///
/// ```
/// use adventure_widget_config::{Config, RefreshConfig};
///
/// let config = Config::default();
/// assert_eq!(config.store_key, "selectedList");
/// assert_eq!(config.instances, 1);
///
/// let config = Config {
///     refresh: RefreshConfig::with_interval(5),
///     instances: 3,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path of the persisted store file.
    ///
    /// Falls back to the platform data directory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,

    /// Key under which the application persists the selected list.
    #[serde(default = "default_store_key")]
    pub store_key: String,

    /// Update cycle configuration.
    #[serde(default)]
    pub refresh: RefreshConfig,

    /// Number of widget instances rendered per update cycle.
    #[serde(default = "default_instances")]
    pub instances: u8,
}

fn default_store_key() -> String {
    SELECTED_LIST_KEY.to_string()
}

fn default_instances() -> u8 {
    MIN_INSTANCES
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: None,
            store_key: default_store_key(),
            refresh: RefreshConfig::default(),
            instances: default_instances(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// If no configuration file is found, returns a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
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
    /// Returns an error if the refresh interval or instance count is out of
    /// range, or the store key is empty.
    pub fn validate(&self) -> Result<()> {
        self.refresh.validate()?;

        if self.store_key.trim().is_empty() {
            return Err(ConfigError::EmptyStoreKey);
        }

        if !(MIN_INSTANCES..=MAX_INSTANCES).contains(&self.instances) {
            return Err(ConfigError::InvalidInstanceCount {
                count: self.instances,
                min: MIN_INSTANCES,
                max: MAX_INSTANCES,
            });
        }

        Ok(())
    }

    /// Returns the store path, resolving the platform default when unset.
    ///
    /// # Errors
    ///
    /// Returns an error if no path is configured and the home directory
    /// cannot be determined.
    pub fn resolved_store_path(&self) -> Result<PathBuf> {
        match &self.store_path {
            Some(path) => Ok(path.clone()),
            None => default_store_path(),
        }
    }

    /// Reads the selected list payload from the configured store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store exists but cannot be read or is corrupt.
    pub fn read_payload(&self) -> Result<Option<String>> {
        let path = self.resolved_store_path()?;
        let store = KeyValueStore::open(&path)?;
        if store.is_empty() {
            tracing::debug!(path = %path.display(), "store has no entries yet");
        }
        Ok(store.get_string(&self.store_key).map(str::to_owned))
    }

    /// Returns the identifiers of the configured widget instances.
    ///
    /// # Examples
    ///
    /// ```
    /// use adventure_widget_config::Config;
    /// use adventure_widget_protocol::WidgetId;
    ///
    /// let config = Config { instances: 2, ..Default::default() };
    /// assert_eq!(config.widget_ids(), vec![WidgetId(1), WidgetId(2)]);
    /// ```
    #[must_use]
    pub fn widget_ids(&self) -> Vec<WidgetId> {
        (1..=u32::from(self.instances)).map(WidgetId).collect()
    }
}
