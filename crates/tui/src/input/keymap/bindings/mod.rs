//! Keybinding definitions grouped by surface.
//!
//! Responsibilities:
//! - Provide ordered keybinding groups for the keymap resolver.
//!
//! Does NOT handle:
//! - Resolving input events into Actions.
//!
//! Invariants:
//! - Binding order is stable for deterministic footer output.

mod global;
mod modal;
mod page;

use super::Keybinding;

pub(super) fn all() -> Vec<Keybinding> {
    let mut bindings = Vec::new();
    bindings.extend(page::bindings());
    bindings.extend(modal::bindings());
    bindings.extend(global::bindings());
    bindings
}
