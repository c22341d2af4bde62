//! Terminal preview host for the Adventure List widget.
//!
//! This crate stands in for a home-screen widget host: it runs the widget
//! pipeline on a schedule, draws each instance as a card with Ratatui, and
//! turns clicks and key presses into the navigation requests the application
//! would receive.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main host struct and run loop
//! - [`state`]: Host state and navigation requests
//! - [`layout`]: Card layout and hit-testing
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//! - [`widgets`]: Card and status bar rendering
//!
//! # Example
//!
//! ```no_run
//! use adventure_widget_config::Config;
//! use adventure_widget_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::HostTerminal::enter()?;
//!
//!     let mut app = App::new(Config::load()?);
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal.leave()?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use state::{HostState, NavigationRequest};
