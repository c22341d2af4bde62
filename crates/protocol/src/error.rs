//! Error types for decoding the persisted widget payload.

use serde_json::error::Category;

/// Errors that can occur while decoding the `selectedList` payload.
///
/// None of these ever reach the rendering host: [`render`](crate::render)
/// recovers from all of them by falling back to the "no selection" state.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The payload is not well-formed JSON (or is truncated).
    #[error("selected list payload is not valid JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    /// The payload is valid JSON but its top level is not an object.
    #[error("selected list payload must be a JSON object, got {found}")]
    NotAnObject {
        /// A short description of what was found instead.
        found: String,
    },

    /// A field has the wrong type, or an item is missing `title` or `completed`.
    #[error("selected list payload does not match the expected shape: {0}")]
    Schema(#[source] serde_json::Error),
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Syntax | Category::Eof | Category::Io => Self::Syntax(err),
            Category::Data => Self::Schema(err),
        }
    }
}

/// A specialized Result type for decoding operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_errors_are_classified() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(DecodeError::from(err), DecodeError::Syntax(_)));
    }

    #[test]
    fn data_errors_are_classified() {
        let err = serde_json::from_str::<bool>(r#""yes""#).unwrap_err();
        assert!(matches!(DecodeError::from(err), DecodeError::Schema(_)));
    }

    #[test]
    fn not_an_object_message_names_the_kind() {
        let err = DecodeError::NotAnObject {
            found: "an array".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "selected list payload must be a JSON object, got an array"
        );
    }
}
