//! Centralized input/keybinding definitions for the TUI.
//!
//! Responsibilities:
//! - Define the shared keybinding catalog used by input resolution and the footer hints.
//!
//! Non-responsibilities:
//! - Mutating application state directly (handled by App via Actions).
//! - Pointer input (see `app::mouse` and `gesture`).
//!
//! Invariants:
//! - Keybinding metadata must remain the single source of truth for hints.
//! - Input resolution must return Actions only and never mutate App state.

pub mod keymap;
