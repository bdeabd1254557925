//! Bindings active on every surface.
//!
//! Invariants:
//! - Focus bindings operate on whichever focus scope is active, so they are
//!   trapped by the overlay without needing a separate modal copy.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::action::Action;

use super::super::{BindingScope, Keybinding, Matcher, Section};

pub(super) fn bindings() -> Vec<Keybinding> {
    vec![
        Keybinding {
            section: Section::Focus,
            keys: "Tab",
            description: "Next control",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Key {
                code: KeyCode::Tab,
                modifiers: KeyModifiers::NONE,
            }),
            action: Some(Action::FocusNext),
            handles_input: true,
        },
        Keybinding {
            section: Section::Focus,
            keys: "Shift+Tab",
            description: "Previous control",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Key {
                code: KeyCode::BackTab,
                modifiers: KeyModifiers::NONE,
            }),
            action: Some(Action::FocusPrevious),
            handles_input: true,
        },
        Keybinding {
            section: Section::Focus,
            keys: "Enter/Space",
            description: "Activate",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Key {
                code: KeyCode::Enter,
                modifiers: KeyModifiers::NONE,
            }),
            action: Some(Action::Activate),
            handles_input: true,
        },
        Keybinding {
            section: Section::Focus,
            keys: "Enter/Space",
            description: "Activate",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Key {
                code: KeyCode::Char(' '),
                modifiers: KeyModifiers::NONE,
            }),
            action: Some(Action::Activate),
            handles_input: true,
        },
        Keybinding {
            section: Section::Global,
            keys: "t",
            description: "Theme",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Key {
                code: KeyCode::Char('t'),
                modifiers: KeyModifiers::NONE,
            }),
            action: Some(Action::CycleTheme),
            handles_input: true,
        },
        Keybinding {
            section: Section::Global,
            keys: "q",
            description: "Quit",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Key {
                code: KeyCode::Char('q'),
                modifiers: KeyModifiers::NONE,
            }),
            action: Some(Action::Quit),
            handles_input: true,
        },
        Keybinding {
            section: Section::Global,
            keys: "Ctrl+C",
            description: "Quit",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Key {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
            }),
            action: Some(Action::Quit),
            handles_input: true,
        },
    ]
}
