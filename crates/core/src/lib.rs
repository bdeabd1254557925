//! Advertising timeline domain model.
//!
//! This crate provides the timeline entries, the compiled-in catalog of
//! advertising history, and the navigation controller that owns the only
//! mutable state of the slideshow (active entry and modal visibility).
//! It has no UI dependencies; the TUI crate renders from it.

pub mod catalog;
pub mod error;
pub mod models;
pub mod navigation;
pub mod timeline;

pub use error::{Result, TimelineError};
pub use models::{Icon, ImageMedia, Media, TimelineEntry, VideoMedia};
pub use navigation::{ModalState, NavigationState, Navigator, Transition};
pub use timeline::Timeline;
