//! Keyboard input handling for the TUI app.
//!
//! Does NOT mutate state; keys resolve to Actions through the keymap for
//! the active scope, and `App::update` applies them.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::action::Action;
use crate::app::App;
use crate::input::keymap::resolve_action;

impl App {
    /// Handle keyboard input - returns Action if one should be dispatched.
    pub fn handle_input(&self, key: KeyEvent) -> Option<Action> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        let action = resolve_action(self.input_scope(), key);
        if action.is_none() {
            tracing::debug!(code = ?key.code, scope = ?self.input_scope(), "Unbound key");
        }
        action
    }
}
