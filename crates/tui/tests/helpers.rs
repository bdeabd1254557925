//! Test helpers for TUI testing.
//!
//! Provides utility functions for simulating keyboard and pointer input and
//! creating test fixtures for the TUI application.

#![allow(dead_code)]

use std::sync::Arc;

use adtimeline_config::Config;
use adtimeline_core::catalog::advertising_history;
use adtimeline_tui::action::Action;
use adtimeline_tui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend};

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Create an Enter key event.
pub fn enter_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
}

/// Create an Escape key event.
pub fn esc_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
}

/// Create a Left arrow key event.
pub fn left_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)
}

/// Create a Right arrow key event.
pub fn right_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)
}

/// Create a Home key event.
pub fn home_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Home, KeyModifiers::NONE)
}

/// Create an End key event.
pub fn end_key() -> KeyEvent {
    KeyEvent::new(KeyCode::End, KeyModifiers::NONE)
}

/// Create a Tab key event.
pub fn tab_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)
}

/// Create a Shift+Tab key event as terminals report it.
pub fn backtab_key() -> KeyEvent {
    KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)
}

/// Create a Ctrl+char key event.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Create a mouse event with no modifiers.
pub fn mouse_event(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// App over the built-in advertising history with default config.
pub fn app() -> App {
    app_with_config(&Config::default())
}

pub fn app_with_config(config: &Config) -> App {
    let timeline = advertising_history().expect("built-in timeline is valid");
    App::new(Arc::new(timeline), config)
}

/// Route a key through the keymap and apply the result, as the main loop does.
///
/// Returns the dispatched action, if any.
pub fn press(app: &mut App, key: KeyEvent) -> Option<Action> {
    let action = app.handle_input(key)?;
    if action != Action::Quit {
        app.update(action);
    }
    Some(action)
}

/// Route a mouse event through the pointer handler and apply the result.
pub fn pointer(app: &mut App, event: MouseEvent) -> Option<Action> {
    let action = app.handle_mouse(event)?;
    app.update(action);
    Some(action)
}

/// Left-button press and release at the same cell.
pub fn click(app: &mut App, column: u16, row: u16) -> Option<Action> {
    pointer(
        app,
        mouse_event(MouseEventKind::Down(MouseButton::Left), column, row),
    );
    pointer(
        app,
        mouse_event(MouseEventKind::Up(MouseButton::Left), column, row),
    )
}

/// Left-button press, drag, and release along a row.
pub fn drag(app: &mut App, from: u16, to: u16, row: u16) -> Option<Action> {
    pointer(
        app,
        mouse_event(MouseEventKind::Down(MouseButton::Left), from, row),
    );
    pointer(
        app,
        mouse_event(MouseEventKind::Drag(MouseButton::Left), to, row),
    );
    pointer(
        app,
        mouse_event(MouseEventKind::Up(MouseButton::Left), to, row),
    )
}

/// Test harness that wraps an App and a TestBackend terminal.
pub struct TuiHarness {
    pub app: App,
    pub terminal: Terminal<TestBackend>,
}

impl TuiHarness {
    /// Create a new test harness with the given terminal dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_app(app(), width, height)
    }

    pub fn with_app(app: App, width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create terminal");
        Self { app, terminal }
    }

    /// Render the current app state and return the buffer contents.
    pub fn render(&mut self) -> String {
        self.terminal
            .draw(|f| self.app.render(f))
            .expect("Failed to render");
        buffer_to_string(self.terminal.backend().buffer())
    }
}

/// Convert a ratatui Buffer to a string for assertions.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut output = String::new();

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            output.push(cell.symbol().chars().next().unwrap_or(' '));
        }
        if y < area.bottom() - 1 {
            output.push('\n');
        }
    }

    output
}
