//! Image overlay keybindings.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::action::Action;

use super::super::{BindingScope, InputScope, Keybinding, Matcher, Section};

pub(super) fn bindings() -> Vec<Keybinding> {
    vec![Keybinding {
        section: Section::Overlay,
        keys: "Esc",
        description: "Close image",
        scope: BindingScope::Only(InputScope::Modal),
        matcher: Some(Matcher::Key {
            code: KeyCode::Esc,
            modifiers: KeyModifiers::NONE,
        }),
        action: Some(Action::CloseModal),
        handles_input: true,
    }]
}
