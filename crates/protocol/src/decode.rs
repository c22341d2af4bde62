//! State decoder.
//!
//! Turns the raw `selectedList` string the application persisted into a
//! [`SelectedListState`]. Decoding is pure: the same input always produces
//! the same result.

use serde_json::Value;

use crate::error::{DecodeError, Result};
use crate::state::SelectedListState;

/// Decodes the persisted payload into a [`SelectedListState`].
///
/// An absent payload, or a payload that is the JSON literal `null`, means the
/// application has not selected a list yet and yields the "no selection"
/// state.
///
/// # Errors
///
/// Returns an error if:
/// - the payload is not valid JSON ([`DecodeError::Syntax`])
/// - the payload's top level is not an object ([`DecodeError::NotAnObject`])
/// - a field has the wrong type or an item lacks `title` or `completed`
///   ([`DecodeError::Schema`])
///
/// # Examples
///
/// ```
/// use adventure_widget_protocol::{decode, SelectedListState};
///
/// let state = decode(Some(r#"{"title": "Groceries", "items": []}"#)).unwrap();
/// assert_eq!(state.title, "Groceries");
///
/// assert_eq!(decode(None).unwrap(), SelectedListState::no_selection());
/// assert!(decode(Some("[1, 2, 3]")).is_err());
/// ```
pub fn decode(raw: Option<&str>) -> Result<SelectedListState> {
    let Some(raw) = raw else {
        return Ok(SelectedListState::no_selection());
    };

    let value: Value = serde_json::from_str(raw)?;
    match value {
        Value::Null => Ok(SelectedListState::no_selection()),
        Value::Object(_) => Ok(serde_json::from_value(value)?),
        other => Err(DecodeError::NotAnObject {
            found: describe(&other).to_string(),
        }),
    }
}

/// Decodes the persisted payload, falling back to the "no selection" state.
///
/// This is the boundary the view composer sits behind: a corrupt or
/// half-written payload degrades to the default state instead of failing.
/// The error is logged at `warn` level.
///
/// # Examples
///
/// ```
/// use adventure_widget_protocol::{decode_or_default, SelectedListState};
///
/// let state = decode_or_default(Some("not json"));
/// assert_eq!(state, SelectedListState::no_selection());
/// ```
#[must_use]
pub fn decode_or_default(raw: Option<&str>) -> SelectedListState {
    decode(raw).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "falling back to default widget state");
        SelectedListState::no_selection()
    })
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
