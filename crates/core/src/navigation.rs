//! Selection and modal state machine for the slideshow.
//!
//! Responsibilities:
//! - Own the active entry index and the modal state.
//! - Apply navigation intents (select, step forward, step backward).
//! - Open and close the enlarged image modal, carrying the focus target
//!   to restore when it closes.
//!
//! Does NOT handle:
//! - Translating keys, clicks or gestures into intents (see the TUI keymap
//!   and gesture modules).
//! - Rendering or focus traversal.
//!
//! Invariants:
//! - `0 <= active_index < timeline.len()` at all times.
//! - Steps saturate at both ends; they never wrap.
//! - The modal is only ever open over an image-backed entry.
//! - Moving to a different entry closes an open modal; the dismissed
//!   return-focus target is reported in the `Transition`.

use std::sync::Arc;

use tracing::debug;

use crate::error::{Result, TimelineError};
use crate::models::TimelineEntry;
use crate::timeline::Timeline;

/// Visibility of the enlarged image overlay.
///
/// `F` is the presentation layer's focus target; the value captured on open
/// is handed back on close so focus can return to the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState<F> {
    Closed,
    Open { return_focus: F },
}

impl<F> Default for ModalState<F> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<F> ModalState<F> {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// The focus target captured when the modal opened.
    pub fn return_focus(&self) -> Option<&F> {
        match self {
            Self::Open { return_focus } => Some(return_focus),
            Self::Closed => None,
        }
    }
}

/// The slideshow's only mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState<F> {
    pub active_index: usize,
    pub modal: ModalState<F>,
}

impl<F> Default for NavigationState<F> {
    fn default() -> Self {
        Self {
            active_index: 0,
            modal: ModalState::Closed,
        }
    }
}

/// Outcome of an index-moving intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Transition<F> {
    /// The request was a no-op (out of range, saturated, or already active).
    Unchanged,
    /// The active entry changed.
    Moved {
        from: usize,
        to: usize,
        /// Return-focus target of a modal closed by this move.
        dismissed: Option<F>,
    },
}

impl<F> Transition<F> {
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Navigation controller over an injected, read-only timeline.
#[derive(Debug, Clone)]
pub struct Navigator<F> {
    timeline: Arc<Timeline>,
    state: NavigationState<F>,
}

impl<F: Copy> Navigator<F> {
    /// Create a controller positioned on the first entry with the modal closed.
    pub fn new(timeline: Arc<Timeline>) -> Self {
        Self {
            timeline,
            state: NavigationState::default(),
        }
    }

    pub fn state(&self) -> &NavigationState<F> {
        &self.state
    }

    pub fn timeline(&self) -> &Arc<Timeline> {
        &self.timeline
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        self.timeline.entries()
    }

    pub fn len(&self) -> usize {
        self.timeline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.state.active_index
    }

    pub fn active_entry(&self) -> &TimelineEntry {
        &self.timeline[self.state.active_index]
    }

    pub fn modal(&self) -> &ModalState<F> {
        &self.state.modal
    }

    pub fn is_modal_open(&self) -> bool {
        self.state.modal.is_open()
    }

    pub fn can_step_backward(&self) -> bool {
        self.state.active_index > 0
    }

    pub fn can_step_forward(&self) -> bool {
        self.state.active_index < self.timeline.last_index()
    }

    /// Select an entry by index. Out-of-range requests are ignored.
    pub fn select_index(&mut self, index: usize) -> Transition<F> {
        if index >= self.timeline.len() {
            debug!(
                index,
                len = self.timeline.len(),
                "Ignoring out-of-range selection"
            );
            return Transition::Unchanged;
        }
        self.move_to(index)
    }

    /// Advance one entry, saturating at the last.
    pub fn step_forward(&mut self) -> Transition<F> {
        if !self.can_step_forward() {
            return Transition::Unchanged;
        }
        self.move_to(self.state.active_index + 1)
    }

    /// Go back one entry, saturating at the first.
    pub fn step_backward(&mut self) -> Transition<F> {
        if !self.can_step_backward() {
            return Transition::Unchanged;
        }
        self.move_to(self.state.active_index - 1)
    }

    /// Open the enlarged image modal over the active entry.
    ///
    /// Fails without changing state when the active entry is video-backed.
    /// Re-opening an open modal keeps the originally captured focus target.
    pub fn open_modal(&mut self, return_focus: F) -> Result<()> {
        let entry = self.active_entry();
        if !entry.is_image_backed() {
            return Err(TimelineError::NotAnImage {
                decade: entry.decade.to_string(),
            });
        }
        if !self.state.modal.is_open() {
            self.state.modal = ModalState::Open { return_focus };
        }
        Ok(())
    }

    /// Close the modal, returning the focus target captured on open.
    ///
    /// Closing a closed modal is a no-op and returns `None`.
    pub fn close_modal(&mut self) -> Option<F> {
        match std::mem::take(&mut self.state.modal) {
            ModalState::Open { return_focus } => Some(return_focus),
            ModalState::Closed => None,
        }
    }

    /// Screen-reader style description of the current position.
    pub fn announcement(&self) -> String {
        let entry = self.active_entry();
        let mut text = format!(
            "{}: {} (entry {} of {})",
            entry.decade,
            entry.title,
            self.state.active_index + 1,
            self.timeline.len()
        );
        if self.is_modal_open() {
            text.push_str(", image enlarged");
        }
        text
    }

    fn move_to(&mut self, to: usize) -> Transition<F> {
        let from = self.state.active_index;
        if from == to {
            return Transition::Unchanged;
        }
        self.state.active_index = to;
        let dismissed = self.close_modal();
        Transition::Moved {
            from,
            to,
            dismissed,
        }
    }
}
