//! Host message types for event handling.
//!
//! This module defines the messages a rendering host produces from user
//! input and feeds back into its own state.

use serde::{Deserialize, Serialize};

use crate::view::Region;

/// Messages that represent user actions on a rendered widget host.
///
/// # Examples
///
/// ```
/// use adventure_widget_protocol::{Message, Region};
///
/// let msg = Message::Tap { region: Region::Title };
/// assert_ne!(msg, Message::Tap { region: Region::ConfigureButton });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Quit the host.
    Quit,
    /// Re-read the store and re-run the pipeline (a background update).
    Refresh,
    /// Tap a region of the focused widget instance.
    Tap {
        /// The region being tapped.
        region: Region,
    },
    /// Mouse click at coordinates (column, row).
    ClickAt {
        /// Column (x coordinate) of the click.
        column: u16,
        /// Row (y coordinate) of the click.
        row: u16,
    },
    /// Move focus to the next widget instance.
    NextInstance,
    /// Move focus to the previous widget instance.
    PrevInstance,
    /// Clear the last navigation request.
    Dismiss,
}
