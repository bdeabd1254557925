//! UI rendering modules for the TUI.
//!
//! This module contains the widget rendering logic that is separated
//! from the main app state management.

pub mod detail;
pub mod popup;
pub mod theme;
pub mod thumbnails;
