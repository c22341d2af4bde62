//! Configuration management for the Adventure List widget host.
//!
//! This crate handles loading, validating, and persisting the host
//! configuration, and takes read-only snapshots of the key/value store the
//! application writes its state to.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`refresh`]: Update cycle interval
//! - [`store`]: Read-only snapshots of the persisted key/value store
//! - [`persistence`]: Config file reading/writing and default locations
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Command-line flags (applied by the binary)
//! 2. Local config (`./adventure-widget.json5` or `./adventure-widget.json`)
//! 3. User config (`~/.config/adventure-widget/config.json5` or `config.json`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use adventure_widget_config::Config;
//! use adventure_widget_protocol::render;
//!
//! # fn example() -> adventure_widget_config::Result<()> {
//! let config = Config::load()?;
//! let payload = config.read_payload()?;
//! let view = render(payload.as_deref());
//! println!("{}", view.title_text);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod persistence;
pub mod refresh;
pub mod store;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use refresh::RefreshConfig;
pub use store::KeyValueStore;
