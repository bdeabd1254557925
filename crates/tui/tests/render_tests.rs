//! Rendering tests using the ratatui TestBackend.
//!
//! These tests render full frames and check the visible text: the page
//! content for the active entry, the status announcement, the key hints
//! for the current scope, and that the overlay is only drawn while open.

mod helpers;

use adtimeline_tui::action::Action;
use helpers::*;

#[test]
fn test_page_shows_active_entry() {
    let mut harness = TuiHarness::new(120, 40);
    let output = harness.render();

    assert!(output.contains("Evolution of Advertising"));
    assert!(output.contains("The Birth of the Creative Revolution"));
    assert!(output.contains("Key Event:"));
    assert!(output.contains("Iconic Ad:"));
    assert!(output.contains("Impact:"));
    assert!(output.contains("images/1960sad.webp"));
    for decade in ["1960s", "1970s", "1980s", "1990s", "2000s", "2010s", "2020s"] {
        assert!(output.contains(decade), "missing thumbnail for {decade}");
    }
}

#[test]
fn test_render_sets_last_area() {
    let mut harness = TuiHarness::new(100, 30);
    assert_eq!(harness.app.last_area.width, 0);
    harness.render();
    assert_eq!(harness.app.last_area.width, 100);
    assert_eq!(harness.app.last_area.height, 30);
}

#[test]
fn test_status_line_follows_navigation() {
    let mut harness = TuiHarness::new(120, 40);
    press(&mut harness.app, right_key());
    let output = harness.render();

    assert!(output.contains("1970s: The Power of Branding (entry 2 of 7)"));
    assert!(output.contains("The Power of Branding"));
}

#[test]
fn test_video_entry_shows_video_panel() {
    let mut harness = TuiHarness::new(120, 40);
    press(&mut harness.app, key('3'));
    let output = harness.render();

    assert!(output.contains("Video"));
    assert!(output.contains("Plays in a web browser"));
    assert!(!output.contains("Enter or click to enlarge"));
}

#[test]
fn test_overlay_only_drawn_while_open() {
    let mut harness = TuiHarness::new(120, 40);
    let closed = harness.render();
    assert!(!closed.contains("Full size advertising"));
    assert!(!closed.contains("[ x ]"));

    harness.app.update(Action::OpenModal);
    let open = harness.render();
    assert!(open.contains("Full size advertising in the 1960s"));
    assert!(open.contains("[ x ]"));

    harness.app.update(Action::CloseModal);
    let reclosed = harness.render();
    assert!(!reclosed.contains("Full size advertising"));
}

#[test]
fn test_footer_hints_follow_scope() {
    let mut harness = TuiHarness::new(160, 40);
    let page = harness.render();
    assert!(page.contains("Home/End"));
    assert!(!page.contains("Esc:"));

    harness.app.update(Action::OpenModal);
    let modal = harness.render();
    assert!(modal.contains("Esc:"));
    assert!(!modal.contains("Home/End"));
}

#[test]
fn test_every_theme_renders() {
    let mut harness = TuiHarness::new(120, 40);
    for _ in 0..5 {
        harness.app.update(Action::CycleTheme);
        let output = harness.render();
        assert!(output.contains("Evolution of Advertising"));
    }
}

#[test]
fn test_small_terminal_does_not_panic() {
    for (width, height) in [(20, 10), (40, 12), (1, 1), (80, 24)] {
        let mut harness = TuiHarness::new(width, height);
        harness.render();
        harness.app.update(Action::OpenModal);
        harness.render();
    }
}
