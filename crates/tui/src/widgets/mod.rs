//! Widget components for the preview host.
//!
//! Each widget is a pure function that renders state to a buffer, which
//! keeps rendering easy to test.
//!
//! # Modules
//!
//! - [`card`]: Renders one widget instance from its [`WidgetView`](adventure_widget_protocol::WidgetView)
//! - [`status_bar`]: Renders the footer with the last navigation request and hints
//!
//! # Example
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use adventure_widget_protocol::render;
//! use adventure_widget_tui::widgets;
//!
//! let view = render(Some(r#"{"title":"Groceries","items":[]}"#));
//!
//! let area = Rect::new(0, 0, 40, 10);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_card(&view, true, area, &mut buf);
//! ```

pub mod card;
pub mod status_bar;

// Re-export primary rendering functions for convenience
pub use card::{border_color, render_card};
pub use status_bar::render_status_bar;
