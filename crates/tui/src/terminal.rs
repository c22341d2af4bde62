//! Terminal setup and teardown for the preview host.
//!
//! [`HostTerminal`] owns the raw-mode, alternate-screen terminal for the
//! lifetime of the host and puts the terminal back the way it found it when
//! dropped, whether the run loop returned normally or with an error. A panic
//! hook covers the remaining case.

use std::io::{self, Stdout};
use std::ops::{Deref, DerefMut};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// The ratatui terminal type the host draws into.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Error type for terminal operations.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Failed to initialize the terminal.
    #[error("failed to setup terminal: {0}")]
    Setup(#[source] io::Error),

    /// Failed to restore the terminal.
    #[error("failed to restore terminal: {0}")]
    Restore(#[source] io::Error),
}

/// A terminal in raw mode with mouse capture, restored on drop.
///
/// # Examples
///
/// ```no_run
/// use adventure_widget_tui::terminal::HostTerminal;
///
/// let mut terminal = HostTerminal::enter().expect("failed to setup terminal");
/// terminal.draw(|_frame| {}).expect("failed to draw");
/// terminal.leave().expect("failed to restore terminal");
/// ```
pub struct HostTerminal {
    terminal: AppTerminal,
    restored: bool,
}

impl HostTerminal {
    /// Enables raw mode, enters the alternate screen, and captures the mouse.
    ///
    /// # Errors
    ///
    /// Returns an error if any terminal operation fails.
    pub fn enter() -> Result<Self, TerminalError> {
        enable_raw_mode().map_err(TerminalError::Setup)?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(TerminalError::Setup)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout)).map_err(TerminalError::Setup)?;
        Ok(Self {
            terminal,
            restored: false,
        })
    }

    /// Restores the terminal and reports any failure.
    ///
    /// Dropping the guard also restores the terminal, but silently.
    ///
    /// # Errors
    ///
    /// Returns an error if any terminal operation fails.
    pub fn leave(mut self) -> Result<(), TerminalError> {
        self.restore()
    }

    fn restore(&mut self) -> Result<(), TerminalError> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        disable_raw_mode().map_err(TerminalError::Restore)?;
        execute!(
            self.terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        )
        .map_err(TerminalError::Restore)?;
        self.terminal.show_cursor().map_err(TerminalError::Restore)
    }
}

impl Deref for HostTerminal {
    type Target = AppTerminal;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for HostTerminal {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for HostTerminal {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            tracing::warn!(error = %err, "terminal was not restored cleanly");
        }
    }
}

/// Installs a panic hook that restores the terminal before the original hook runs.
///
/// Call this once at startup, before entering the host terminal.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}
