//! Mouse event handling for the TUI app.
//!
//! Responsibilities:
//! - Feed left-button press/drag/release into the swipe tracker
//! - Turn taps into actions by hit-testing the shared layout
//! - Turn touch swipes into steps
//! - Close the overlay on taps outside the enlarged image
//!
//! Does NOT handle:
//! - Does NOT handle keyboard input
//! - Does NOT render the UI
//!
//! Invariants:
//! - Taps resolve on release so a swipe can replace them.
//! - While the overlay is open only overlay hits are considered.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::action::Action;
use crate::app::App;
use crate::app::layout::{ModalLayout, OverlayHit, ScreenLayout};
use crate::focus::FocusTarget;
use crate::gesture::{Gesture, SwipeDirection};

impl App {
    /// Handle mouse input - returns Action if one should be dispatched.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.swipe
                    .press(self.pointer_kind, mouse.column, mouse.row);
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.swipe.drag(mouse.column, mouse.row);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                match self.swipe.release(mouse.column, mouse.row)? {
                    Gesture::Swipe(direction) => self.handle_swipe(direction),
                    Gesture::Tap { column, row } => self.handle_tap(column, row),
                }
            }
            _ => None,
        }
    }

    fn handle_swipe(&self, direction: SwipeDirection) -> Option<Action> {
        if self.navigator.is_modal_open() {
            return None;
        }
        match direction {
            SwipeDirection::Left => Some(Action::StepForward),
            SwipeDirection::Right => Some(Action::StepBackward),
        }
    }

    fn handle_tap(&mut self, column: u16, row: u16) -> Option<Action> {
        if self.navigator.is_modal_open() {
            return match ModalLayout::calculate(self.last_area).hit(column, row) {
                OverlayHit::Close | OverlayHit::Backdrop => Some(Action::CloseModal),
                OverlayHit::Image => None,
            };
        }

        let layout = ScreenLayout::calculate(self.last_area, self.navigator.len());
        let target = layout.hit(column, row)?;
        if !self.is_enabled(target) {
            return None;
        }
        self.focus.set_focus(target);

        match target {
            FocusTarget::Thumbnail(index) => Some(Action::SelectIndex(index)),
            FocusTarget::Previous => Some(Action::StepBackward),
            FocusTarget::Next => Some(Action::StepForward),
            FocusTarget::Media if self.navigator.active_entry().is_image_backed() => {
                Some(Action::OpenModal)
            }
            // Video panels have no overlay; activation reports where it plays.
            FocusTarget::Media => Some(Action::Activate),
            FocusTarget::Close => None,
        }
    }
}
