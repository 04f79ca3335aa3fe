//! Terminal ownership for the monitor's UI.
//!
//! [`TerminalManager`] puts the terminal into raw, full-screen mode and
//! restores it when dropped, on normal exit and on error paths alike.
//!
//! ```no_run
//! use netpulse::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> netpulse::error::MonitorResult<()> {
//!     setup_panic_hook();
//!     let mut manager = TerminalManager::new()?;
//!     let _terminal = manager.terminal();
//!     // ... draw ...
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

use crate::error::{MonitorError, MonitorResult};

/// Restores the terminal when dropped.
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    /// Restore now. Later calls, including the one from `Drop`, do nothing.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the ratatui terminal and the guard that restores it.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enable raw mode, enter the alternate screen and clear it.
    ///
    /// The guard exists as soon as raw mode is on, so a failure in any later
    /// step still leaves the terminal as it was found.
    pub fn new() -> MonitorResult<Self> {
        enable_raw_mode().map_err(MonitorError::TerminalInit)?;
        let guard = TerminalGuard::new();

        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout).map_err(MonitorError::TerminalInit)?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(MonitorError::TerminalInit)?;
        terminal.clear().map_err(MonitorError::TerminalInit)?;

        tracing::debug!(target: "netpulse::monitor", "Terminal initialised");

        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore the terminal before the manager is dropped.
    pub fn restore(&mut self) {
        self.guard.cleanup();
        tracing::debug!(target: "netpulse::monitor", "Terminal restored");
    }
}
