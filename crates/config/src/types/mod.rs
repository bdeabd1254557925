//! Configuration types for the timeline TUI.
//!
//! Responsibilities:
//! - Define the resolved runtime `Config`.
//! - Re-export theme types.
//!
//! Does NOT handle:
//! - Loading or merging configuration sources (see `loader`).

mod theme;

pub use theme::{ColorTheme, Theme, UnknownThemeError};

use crate::constants::{
    DEFAULT_MOUSE_ENABLED, DEFAULT_SWIPE_THRESHOLD, DEFAULT_TOUCH_INPUT,
};

/// Fully resolved presentation configuration.
///
/// Holds presentation concerns only; navigation state is never configured
/// or persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Selected color theme.
    pub theme: ColorTheme,
    /// Whether mouse capture is enabled.
    pub mouse: bool,
    /// Whether pointer events come from a touchscreen and may form swipes.
    pub touch_input: bool,
    /// Minimum horizontal travel in columns for a swipe.
    pub swipe_threshold: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ColorTheme::default(),
            mouse: DEFAULT_MOUSE_ENABLED,
            touch_input: DEFAULT_TOUCH_INPUT,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}
