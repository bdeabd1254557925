//! Terminal state management and cleanup.
//!
//! Responsibilities:
//! - Enter raw mode and the alternate screen, optionally capturing the mouse.
//! - Ensure terminal state is restored on application exit, even during panics.
//!
//! Does NOT handle:
//! - Drawing frames (see `App::render`).
//!
//! Invariants / Assumptions:
//! - Must live for the duration of the TUI session.
//! - Drop implementation must not panic.

use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

/// Guard that ensures terminal state is restored on drop.
///
/// # Invariants
/// - Restoration runs at most once, either explicitly or on drop
pub struct TerminalGuard {
    mouse_capture: bool,
    restored: bool,
}

impl TerminalGuard {
    /// Switch the terminal into TUI mode.
    ///
    /// # Errors
    /// Returns an I/O error if raw mode or the alternate screen cannot be entered.
    /// Raw mode is undone before returning in that case.
    pub fn enter(mouse_capture: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        let entered = if mouse_capture {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        } else {
            execute!(stdout, EnterAlternateScreen)
        };
        if let Err(e) = entered {
            let _ = disable_raw_mode();
            return Err(e);
        }
        Ok(Self {
            mouse_capture,
            restored: false,
        })
    }

    /// Whether mouse events are being captured.
    pub fn mouse_capture(&self) -> bool {
        self.mouse_capture
    }

    /// Restore the terminal, reporting errors on the normal exit path.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        disable_raw_mode()?;
        let mut stdout = io::stdout();
        if self.mouse_capture {
            execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)
        } else {
            execute!(stdout, LeaveAlternateScreen)
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors are ignored here; the explicit restore in main() reports them.
        let _ = self.restore();
    }
}
