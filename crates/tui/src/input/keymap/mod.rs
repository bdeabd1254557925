//! Centralized keybinding catalog and input resolver.
//!
//! Responsibilities:
//! - Define a single source of truth for keybindings and their descriptions.
//! - Resolve KeyEvents into Actions without mutating App state.
//! - Derive the footer hint line from the same table.
//!
//! Non-responsibilities:
//! - Performing App state mutations or side effects.
//!
//! Invariants:
//! - Bindings are deterministic and stable for hint rendering.
//! - Resolver never mutates App state and returns at most one Action.
//! - Page bindings are unreachable while the overlay is open; arrows are
//!   global.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;

mod bindings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Global,
    Navigation,
    Focus,
    Overlay,
}

/// Which surface currently receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputScope {
    /// The slideshow page.
    Page,
    /// The enlarged image overlay.
    Modal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BindingScope {
    Global,
    Only(InputScope),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Matcher {
    Key {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
}

#[derive(Debug, Clone)]
pub(crate) struct Keybinding {
    pub(crate) section: Section,
    pub(crate) keys: &'static str,
    pub(crate) description: &'static str,
    pub(crate) scope: BindingScope,
    pub(crate) matcher: Option<Matcher>,
    pub(crate) action: Option<Action>,
    pub(crate) handles_input: bool,
}

impl Keybinding {
    fn matches(&self, key: KeyEvent, scope: InputScope) -> bool {
        if !self.scope_applies(scope) {
            return false;
        }
        let Some(matcher) = self.matcher else {
            return false;
        };
        match matcher {
            Matcher::Key { code, modifiers } => {
                key.code == code && normalized_modifiers(key) == modifiers
            }
        }
    }

    fn scope_applies(&self, scope: InputScope) -> bool {
        match self.scope {
            BindingScope::Global => true,
            BindingScope::Only(s) => s == scope,
        }
    }
}

/// Terminals disagree on whether BackTab carries SHIFT; treat both the same.
fn normalized_modifiers(key: KeyEvent) -> KeyModifiers {
    if key.code == KeyCode::BackTab {
        key.modifiers - KeyModifiers::SHIFT
    } else {
        key.modifiers
    }
}

pub(crate) fn keybindings() -> Vec<Keybinding> {
    bindings::all()
}

/// Resolve a key press in the given scope.
pub fn resolve_action(scope: InputScope, key: KeyEvent) -> Option<Action> {
    for binding in keybindings() {
        if !binding.handles_input {
            continue;
        }
        if binding.matches(key, scope) {
            return binding.action;
        }
    }
    None
}

/// `(keys, description)` pairs for the footer, in table order, deduplicated by keys.
pub fn footer_hints(scope: InputScope) -> Vec<(&'static str, &'static str)> {
    let mut hints: Vec<(&'static str, &'static str)> = Vec::new();
    for binding in keybindings() {
        if !binding.scope_applies(scope) || hints.iter().any(|(k, _)| *k == binding.keys) {
            continue;
        }
        hints.push((binding.keys, binding.description));
    }
    hints
}
