//! Decoded widget state.
//!
//! This module defines the normalized record the decoder produces from the
//! persisted `selectedList` payload. A [`SelectedListState`] is always fully
//! populated: every "missing" case in the payload is resolved to a default
//! while deserializing, so nothing downstream has to deal with absent fields.

use serde::{Deserialize, Serialize};

/// Title shown when no list is selected, or the selected list has no title.
pub const NO_SELECTION_TITLE: &str = "Select List";

/// A single entry of the selected list, as shown on the widget.
///
/// Both fields are required in the payload; an item missing either one makes
/// the whole payload fail to decode.
///
/// # Examples
///
/// ```
/// use adventure_widget_protocol::TaskSummary;
///
/// let item: TaskSummary = serde_json::from_str(r#"{"title": "Milk", "completed": false}"#).unwrap();
/// assert_eq!(item, TaskSummary::new("Milk", false));
///
/// assert!(serde_json::from_str::<TaskSummary>(r#"{"title": "Milk"}"#).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskSummary {
    /// Title of the task.
    pub title: String,
    /// Whether the task has been checked off.
    ///
    /// Carried through for richer renderings; the canonical view ignores it.
    pub completed: bool,
}

impl TaskSummary {
    /// Creates a new task summary.
    #[must_use]
    pub fn new(title: impl Into<String>, completed: bool) -> Self {
        Self {
            title: title.into(),
            completed,
        }
    }
}

/// The currently selected list, normalized for rendering.
///
/// Deserializing accepts an object whose `title` and `items` fields may each
/// be missing or `null`:
///
/// - a missing or `null` title becomes [`NO_SELECTION_TITLE`]; any string,
///   including the empty string, is kept verbatim
/// - missing or `null` items become an empty list; item order is preserved
/// - unknown fields (such as the list `id`) are ignored
///
/// # Examples
///
/// ```
/// use adventure_widget_protocol::{SelectedListState, NO_SELECTION_TITLE};
///
/// let state: SelectedListState = serde_json::from_str(r#"{"title": null}"#).unwrap();
/// assert_eq!(state.title, NO_SELECTION_TITLE);
/// assert!(state.items.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SelectedListPayload")]
pub struct SelectedListState {
    /// Display title of the selected list.
    pub title: String,
    /// Items of the selected list, in the order the application stored them.
    pub items: Vec<TaskSummary>,
}

impl SelectedListState {
    /// Creates a state for a selected list.
    ///
    /// # Examples
    ///
    /// ```
    /// use adventure_widget_protocol::{SelectedListState, TaskSummary};
    ///
    /// let state = SelectedListState::new("Groceries", vec![TaskSummary::new("Milk", false)]);
    /// assert_eq!(state.title, "Groceries");
    /// assert_eq!(state.items.len(), 1);
    /// ```
    #[must_use]
    pub fn new(title: impl Into<String>, items: Vec<TaskSummary>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }

    /// Returns a freshly built "no selection" state.
    ///
    /// # Examples
    ///
    /// ```
    /// use adventure_widget_protocol::{SelectedListState, NO_SELECTION_TITLE};
    ///
    /// let state = SelectedListState::no_selection();
    /// assert_eq!(state.title, NO_SELECTION_TITLE);
    /// assert!(state.items.is_empty());
    /// ```
    #[must_use]
    pub fn no_selection() -> Self {
        Self {
            title: NO_SELECTION_TITLE.to_string(),
            items: Vec::new(),
        }
    }
}

impl Default for SelectedListState {
    fn default() -> Self {
        Self::no_selection()
    }
}

/// Wire shape of the `selectedList` payload, before defaults are applied.
#[derive(Deserialize)]
struct SelectedListPayload {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    items: Option<Vec<TaskSummary>>,
}

impl From<SelectedListPayload> for SelectedListState {
    fn from(payload: SelectedListPayload) -> Self {
        Self {
            title: payload
                .title
                .unwrap_or_else(|| NO_SELECTION_TITLE.to_string()),
            items: payload.items.unwrap_or_default(),
        }
    }
}
