//! Action protocol for TUI event handling.
//!
//! Actions represent raw terminal input and the navigation intents derived
//! from it. Raw variants (`Input`, `Mouse`, `Resize`) come from the input
//! task; intent variants come from the keymap and the mouse/gesture layer.
//!
//! Does NOT handle:
//! - Applying actions (see `App::update`).
//! - Mapping keys to actions (see `input::keymap`).

use crossterm::event::{KeyEvent, MouseEvent};

/// Unified action type for TUI event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // System
    /// Quit the application
    Quit,
    /// Terminal resized to (width, height)
    Resize(u16, u16),
    /// Switch to the next color theme
    CycleTheme,

    // Raw input
    /// Raw keyboard input event
    Input(KeyEvent),
    /// Raw mouse input event
    Mouse(MouseEvent),

    // Navigation
    /// Select the entry at this index
    SelectIndex(usize),
    /// Advance one entry
    StepForward,
    /// Go back one entry
    StepBackward,
    /// Jump to the first entry
    SelectFirst,
    /// Jump to the last entry
    SelectLast,

    // Modal
    /// Enlarge the active entry's image
    OpenModal,
    /// Dismiss the enlarged image
    CloseModal,

    // Focus
    FocusNext,
    FocusPrevious,
    /// Activate the focused control (Enter/Space)
    Activate,
}

impl Action {
    /// Whether this action must never be dropped under backpressure.
    pub fn is_critical(&self) -> bool {
        !matches!(self, Action::Mouse(_))
    }
}
