//! Read-only access to the persisted key/value store.
//!
//! The application owns the store and writes it as a JSON object mapping
//! keys to values. The widget host only ever takes a snapshot of it; nothing
//! in this module writes back.
//!
//! ```json
//! {
//!   "selectedList": "{\"title\":\"Groceries\",\"items\":[]}",
//!   "_counter": 3
//! }
//! ```

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{ConfigError, Result};

/// An immutable snapshot of the persisted store.
///
/// # Examples
///
/// ```
/// use adventure_widget_config::KeyValueStore;
///
/// let store = KeyValueStore::from_json(r#"{"selectedList": "{}"}"#).unwrap();
/// assert_eq!(store.get_string("selectedList"), Some("{}"));
/// assert_eq!(store.get_string("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyValueStore {
    entries: Map<String, Value>,
}

impl KeyValueStore {
    /// Takes a snapshot of the store file at `path`.
    ///
    /// A missing file means the application has not persisted anything yet
    /// and yields an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or is not a
    /// JSON object.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "store file does not exist yet");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError::ReadStore {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        Self::parse(&content).map_err(|reason| ConfigError::InvalidStore {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Builds a snapshot from the store's JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON object.
    pub fn from_json(content: &str) -> Result<Self> {
        Self::parse(content).map_err(|reason| ConfigError::InvalidStore {
            path: PathBuf::from("<memory>"),
            reason,
        })
    }

    fn parse(content: &str) -> std::result::Result<Self, String> {
        match serde_json::from_str::<Value>(content) {
            Ok(Value::Object(entries)) => Ok(Self { entries }),
            Ok(_) => Err("top level is not an object".to_string()),
            Err(e) => Err(e.to_string()),
        }
    }

    /// Returns the string stored under `key`.
    ///
    /// Missing keys and `null` values read as `None`, as do values of any
    /// other type, which the application never writes for string keys.
    #[must_use]
    pub fn get_string(&self, key: &str) -> Option<&str> {
        match self.entries.get(key)? {
            Value::String(s) => Some(s),
            Value::Null => None,
            other => {
                tracing::warn!(key, kind = value_kind(other), "ignoring non-string store value");
                None
            }
        }
    }

    /// Returns whether the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
