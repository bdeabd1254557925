//! Slideshow page keybindings.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::action::Action;

use super::super::{BindingScope, InputScope, Keybinding, Matcher, Section};

fn page_key(keys: &'static str, description: &'static str, code: KeyCode, action: Action) -> Keybinding {
    nav_key(BindingScope::Only(InputScope::Page), keys, description, code, action)
}

fn nav_key(
    scope: BindingScope,
    keys: &'static str,
    description: &'static str,
    code: KeyCode,
    action: Action,
) -> Keybinding {
    Keybinding {
        section: Section::Navigation,
        keys,
        description,
        scope,
        matcher: Some(Matcher::Key {
            code,
            modifiers: KeyModifiers::NONE,
        }),
        action: Some(action),
        handles_input: true,
    }
}

pub(super) fn bindings() -> Vec<Keybinding> {
    let mut bindings = vec![
        // Arrows also work over the overlay; moving closes it.
        nav_key(BindingScope::Global, "←/→", "Prev/next", KeyCode::Left, Action::StepBackward),
        nav_key(BindingScope::Global, "←/→", "Prev/next", KeyCode::Right, Action::StepForward),
        page_key("Home/End", "First/last", KeyCode::Home, Action::SelectFirst),
        page_key("Home/End", "First/last", KeyCode::End, Action::SelectLast),
    ];

    bindings.extend(('1'..='9').zip(0usize..).map(|(digit, index)| {
        page_key("1-9", "Jump", KeyCode::Char(digit), Action::SelectIndex(index))
    }));

    // Pointer gesture, listed for the footer only.
    bindings.push(Keybinding {
        section: Section::Navigation,
        keys: "Swipe",
        description: "Prev/next (touch)",
        scope: BindingScope::Only(InputScope::Page),
        matcher: None,
        action: None,
        handles_input: false,
    });

    bindings
}
