//! Widget pipeline for the Adventure List home-screen widget.
//!
//! The application persists its currently selected list as a JSON string
//! under the `selectedList` key. This crate turns that string into a
//! [`WidgetView`]: the title and item summary to display, and the tap
//! actions bound to each region of the widget.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`state`]: The normalized [`SelectedListState`] and [`TaskSummary`]
//! - [`decode`]: Payload decoding with default substitution
//! - [`view`]: The [`WidgetView`] output, regions and tap targets
//! - [`compose`]: Mapping state onto a view
//! - [`pipeline`]: The [`render`] entry point and batch rendering
//! - [`message`]: Host input messages
//! - [`error`]: Error types for decoding
//!
//! # Examples
//!
//! ```
//! use adventure_widget_protocol::{render, Region, TapTarget};
//!
//! let raw = r#"{"title":"Groceries","items":[{"title":"Milk","completed":false},{"title":"Eggs","completed":true}]}"#;
//! let view = render(Some(raw));
//!
//! assert_eq!(view.title_text, "Groceries");
//! assert_eq!(view.summary_text, "• Milk\n• Eggs");
//! assert_eq!(view.target_for(Region::ConfigureButton), Some(TapTarget::OpenConfiguration));
//! ```

pub mod compose;
pub mod decode;
pub mod error;
pub mod message;
pub mod pipeline;
pub mod state;
pub mod view;

// Re-export primary types at crate root for convenience
pub use compose::{ITEM_BULLET, ITEM_SEPARATOR, compose};
pub use decode::{decode, decode_or_default};
pub use error::{DecodeError, Result};
pub use message::Message;
pub use pipeline::{WidgetId, render, render_batch};
pub use state::{NO_SELECTION_TITLE, SelectedListState, TaskSummary};
pub use view::{Region, TapAction, TapTarget, WidgetView};

/// Store key under which the application persists the selected list.
pub const SELECTED_LIST_KEY: &str = "selectedList";
