//! Error types for configuration operations.
//!
//! This module defines the error types that can occur during configuration
//! loading, parsing, and validation, and while reading the persisted store.

use std::path::PathBuf;

/// Errors that can occur during configuration and store operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file at {path}: {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a configuration file.
    #[error("failed to write config file at {path}: {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON5 configuration.
    #[error("failed to parse config: {0}")]
    ParseJson5(#[from] serde_json5::Error),

    /// Failed to serialize configuration to JSON.
    #[error("failed to serialize config: {0}")]
    SerializeJson(#[from] serde_json::Error),

    /// Invalid refresh interval.
    #[error("invalid refresh interval: {reason}")]
    InvalidRefreshInterval {
        /// The reason the interval is invalid.
        reason: String,
    },

    /// Invalid number of widget instances.
    #[error("invalid instance count {count}: must be between {min} and {max}")]
    InvalidInstanceCount {
        /// The configured count.
        count: u8,
        /// The smallest allowed count.
        min: u8,
        /// The largest allowed count.
        max: u8,
    },

    /// The store key is empty.
    #[error("store key cannot be empty")]
    EmptyStoreKey,

    /// Failed to read the persisted store.
    #[error("failed to read store at {path}: {source}")]
    ReadStore {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The persisted store is not a JSON object.
    #[error("store at {path} is not a JSON object: {reason}")]
    InvalidStore {
        /// The store path.
        path: PathBuf,
        /// What was wrong with it.
        reason: String,
    },

    /// Failed to determine the platform data or config directory.
    #[error("could not determine home directory")]
    NoHomeDirectory,
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
