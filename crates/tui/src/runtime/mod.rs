//! Runtime components for the TUI application.
//!
//! This module contains the runtime infrastructure for the TUI:
//! - Terminal management (TerminalGuard)
//! - Configuration loading with CLI overrides
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `adtimeline_tui::app` and `adtimeline_tui::ui`).
//! - Timeline content or navigation rules (see `adtimeline_core`).
//!
//! Invariants:
//! - All modules are initialized during application startup in `main()`.

pub mod config;
pub mod terminal;
