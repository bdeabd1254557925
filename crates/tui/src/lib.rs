//! Advertising Timeline TUI Library
//!
//! This library provides the application state, input mapping, focus
//! management and UI components for the advertising history slideshow.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use adtimeline_config::Config;
//! use adtimeline_core::catalog::advertising_history;
//! use adtimeline_tui::{Action, App};
//! use crossterm::event::{KeyCode, KeyEvent};
//!
//! let timeline = Arc::new(advertising_history().expect("catalog is valid"));
//! let mut app = App::new(timeline, &Config::default());
//! if let Some(action) = app.handle_input(KeyEvent::from(KeyCode::Right)) {
//!     app.update(action);
//! }
//! assert_eq!(app.navigator.active_index(), 1);
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod focus;
pub mod gesture;
pub mod input;
pub mod runtime;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::{App, FOOTER_HEIGHT, HEADER_HEIGHT};
pub use focus::{FocusManager, FocusTarget};
