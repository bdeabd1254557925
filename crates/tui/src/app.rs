//! Application state and rendering.
//!
//! This module contains the main application state, input handling,
//! and rendering logic for the TUI.
//!
//! The module is organized into submodules:
//! - `layout`: Shared rectangles for rendering and hit-testing
//! - `input`: Keyboard input resolution
//! - `mouse`: Pointer input, taps and swipes
//! - `actions`: Action handling
//! - `render`: Rendering logic

pub mod layout;

mod actions;
mod input;
mod mouse;
mod render;

use std::sync::Arc;

use adtimeline_config::{ColorTheme, Config, Theme};
use adtimeline_core::{Navigator, Timeline};
use ratatui::layout::Rect;

use crate::focus::{FocusManager, FocusTarget};
use crate::gesture::{PointerKind, SwipeTracker};
use crate::input::keymap::InputScope;

pub use layout::{FOOTER_HEIGHT, HEADER_HEIGHT, ModalLayout, OverlayHit, ScreenLayout};

/// Main application state.
pub struct App {
    /// Active entry and overlay state; the return-focus target travels with it.
    pub navigator: Navigator<FocusTarget>,
    pub focus: FocusManager,
    pub color_theme: ColorTheme,
    pub theme: Theme,
    /// How terminal pointer events are classified for gesture recognition.
    pub pointer_kind: PointerKind,
    pub swipe: SwipeTracker,
    /// Area of the last rendered frame, used for hit-testing.
    pub last_area: Rect,
    /// Live-region text shown in the status line.
    pub status: String,
}

impl App {
    /// Create the app over an injected timeline.
    pub fn new(timeline: Arc<Timeline>, config: &Config) -> Self {
        let navigator = Navigator::new(timeline);
        let focus = FocusManager::for_timeline(navigator.len());
        let status = navigator.announcement();
        Self {
            navigator,
            focus,
            color_theme: config.theme,
            theme: Theme::from_color_theme(config.theme),
            pointer_kind: PointerKind::from_touch_input(config.touch_input),
            swipe: SwipeTracker::new(config.swipe_threshold),
            last_area: Rect::default(),
            status,
        }
    }

    /// Which keybinding scope is active.
    pub fn input_scope(&self) -> InputScope {
        if self.navigator.is_modal_open() {
            InputScope::Modal
        } else {
            InputScope::Page
        }
    }

    /// Whether a control can currently be activated.
    pub fn is_enabled(&self, target: FocusTarget) -> bool {
        control_enabled(&self.navigator, target)
    }
}

/// Previous/Next are disabled at the ends; everything else is always enabled.
fn control_enabled(navigator: &Navigator<FocusTarget>, target: FocusTarget) -> bool {
    match target {
        FocusTarget::Previous => navigator.can_step_backward(),
        FocusTarget::Next => navigator.can_step_forward(),
        FocusTarget::Thumbnail(index) => index < navigator.len(),
        FocusTarget::Media | FocusTarget::Close => true,
    }
}
