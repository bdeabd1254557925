//! Tests for the image overlay and keyboard focus handling.
//!
//! This module tests:
//! - Tab/Shift+Tab order and skipping of disabled controls
//! - Opening the overlay from the focused media panel
//! - The focus trap while the overlay is open
//! - Focus restoration on Escape, Close activation and navigation
//! - Video entries never opening the overlay

mod helpers;

use adtimeline_tui::action::Action;
use adtimeline_tui::focus::FocusTarget;
use helpers::*;

/// Focus the media panel from the initial thumbnail focus.
fn focus_media(app: &mut adtimeline_tui::App) {
    press(app, backtab_key());
    assert_eq!(app.focus.current(), Some(FocusTarget::Media));
}

#[test]
fn test_tab_cycles_thumbnails_then_controls() {
    let mut app = app();
    press(&mut app, tab_key());
    assert_eq!(app.focus.current(), Some(FocusTarget::Thumbnail(1)));
    for _ in 0..5 {
        press(&mut app, tab_key());
    }
    assert_eq!(app.focus.current(), Some(FocusTarget::Thumbnail(6)));

    // Previous is disabled on the first entry.
    press(&mut app, tab_key());
    assert_eq!(app.focus.current(), Some(FocusTarget::Next));
    press(&mut app, tab_key());
    assert_eq!(app.focus.current(), Some(FocusTarget::Media));
    press(&mut app, tab_key());
    assert_eq!(app.focus.current(), Some(FocusTarget::Thumbnail(0)));
}

#[test]
fn test_enter_on_focused_thumbnail_selects_it() {
    let mut app = app();
    press(&mut app, tab_key());
    press(&mut app, tab_key());
    press(&mut app, enter_key());
    assert_eq!(app.navigator.active_index(), 2);
}

#[test]
fn test_space_on_focused_next_steps_forward() {
    let mut app = app();
    press(&mut app, key('4'));
    press(&mut app, backtab_key());
    press(&mut app, backtab_key());
    assert_eq!(app.focus.current(), Some(FocusTarget::Next));
    press(&mut app, key(' '));
    assert_eq!(app.navigator.active_index(), 4);
}

#[test]
fn test_enter_on_media_opens_overlay_and_traps_focus() {
    let mut app = app();
    focus_media(&mut app);
    press(&mut app, enter_key());

    assert!(app.navigator.is_modal_open());
    assert!(app.focus.is_trapped());
    assert_eq!(app.focus.current(), Some(FocusTarget::Close));
    assert!(app.status.ends_with(", image enlarged"));

    for _ in 0..3 {
        press(&mut app, tab_key());
        assert_eq!(app.focus.current(), Some(FocusTarget::Close));
        press(&mut app, backtab_key());
        assert_eq!(app.focus.current(), Some(FocusTarget::Close));
    }
}

#[test]
fn test_escape_closes_overlay_and_restores_focus() {
    let mut app = app();
    focus_media(&mut app);
    press(&mut app, enter_key());
    assert_eq!(press(&mut app, esc_key()), Some(Action::CloseModal));

    assert!(!app.navigator.is_modal_open());
    assert!(!app.focus.is_trapped());
    assert_eq!(app.focus.current(), Some(FocusTarget::Media));
    assert!(!app.status.contains("image enlarged"));
}

#[test]
fn test_activating_close_restores_focus() {
    let mut app = app();
    focus_media(&mut app);
    press(&mut app, enter_key());
    press(&mut app, enter_key());

    assert!(!app.navigator.is_modal_open());
    assert_eq!(app.focus.current(), Some(FocusTarget::Media));
}

#[test]
fn test_escape_without_overlay_does_nothing() {
    let mut app = app();
    assert_eq!(press(&mut app, esc_key()), None);
    assert_eq!(app.focus.current(), Some(FocusTarget::Thumbnail(0)));
}

#[test]
fn test_close_twice_is_harmless() {
    let mut app = app();
    focus_media(&mut app);
    press(&mut app, enter_key());
    app.update(Action::CloseModal);
    app.update(Action::CloseModal);
    assert!(!app.navigator.is_modal_open());
    assert_eq!(app.focus.current(), Some(FocusTarget::Media));
}

#[test]
fn test_reopen_keeps_original_return_focus() {
    let mut app = app();
    focus_media(&mut app);
    press(&mut app, enter_key());
    app.update(Action::OpenModal);
    press(&mut app, esc_key());
    assert_eq!(app.focus.current(), Some(FocusTarget::Media));
}

#[test]
fn test_arrow_in_overlay_moves_and_closes() {
    let mut app = app();
    focus_media(&mut app);
    press(&mut app, enter_key());
    press(&mut app, right_key());

    assert_eq!(app.navigator.active_index(), 1);
    assert!(!app.navigator.is_modal_open());
    assert!(!app.focus.is_trapped());
    assert_eq!(app.focus.current(), Some(FocusTarget::Media));
}

#[test]
fn test_page_keys_unreachable_in_overlay() {
    let mut app = app();
    focus_media(&mut app);
    press(&mut app, enter_key());
    assert_eq!(press(&mut app, key('5')), None);
    assert_eq!(press(&mut app, end_key()), None);
    assert_eq!(app.navigator.active_index(), 0);
    assert!(app.navigator.is_modal_open());
}

#[test]
fn test_video_entry_never_opens_overlay() {
    let mut app = app();
    press(&mut app, key('3'));
    focus_media(&mut app);
    press(&mut app, enter_key());

    assert!(!app.navigator.is_modal_open());
    assert!(!app.focus.is_trapped());
    assert_eq!(
        app.status,
        "1980s: Apple \"1984\" commercial plays in a web browser at https://www.youtube.com/embed/VtvjbmoDx-I"
    );

    app.update(Action::OpenModal);
    assert!(!app.navigator.is_modal_open());
}
