//! Action handling for the TUI app.
//!
//! Responsibilities:
//! - Process Actions and mutate App state accordingly
//! - Apply navigator transitions and keep focus consistent with them
//! - Open and close the image overlay, trapping and restoring focus
//!
//! Non-responsibilities:
//! - Does NOT create Actions (handled by input handlers)
//! - Does NOT decide to quit (handled by the main loop)
//!
//! Invariants:
//! - Focus is trapped exactly while the overlay is open.
//! - After an action the status line shows the navigator announcement,
//!   or a one-off notice produced by that action.

use adtimeline_config::Theme;
use adtimeline_core::{Media, Transition};
use ratatui::layout::Rect;
use tracing::{debug, info, warn};

use crate::action::Action;
use crate::app::{App, control_enabled};
use crate::focus::FocusTarget;

impl App {
    /// Pure state mutation based on Action.
    pub fn update(&mut self, action: Action) {
        let mut notice = None;
        match action {
            Action::Quit | Action::Input(_) | Action::Mouse(_) => {}
            Action::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                self.last_area = Rect::new(0, 0, width, height);
                self.swipe.cancel();
            }
            Action::CycleTheme => {
                self.color_theme = self.color_theme.cycle_next();
                self.theme = Theme::from_color_theme(self.color_theme);
                info!(theme = %self.color_theme, "Theme changed");
            }
            Action::SelectIndex(index) => {
                let transition = self.navigator.select_index(index);
                self.apply_transition(transition);
            }
            Action::StepForward => {
                let transition = self.navigator.step_forward();
                self.apply_transition(transition);
            }
            Action::StepBackward => {
                let transition = self.navigator.step_backward();
                self.apply_transition(transition);
            }
            Action::SelectFirst => {
                let transition = self.navigator.select_index(0);
                self.apply_transition(transition);
            }
            Action::SelectLast => {
                let last = self.navigator.len().saturating_sub(1);
                let transition = self.navigator.select_index(last);
                self.apply_transition(transition);
            }
            Action::OpenModal => self.open_modal(),
            Action::CloseModal => self.close_modal(),
            Action::FocusNext => {
                let navigator = &self.navigator;
                self.focus.next(|t| control_enabled(navigator, t));
            }
            Action::FocusPrevious => {
                let navigator = &self.navigator;
                self.focus.prev(|t| control_enabled(navigator, t));
            }
            Action::Activate => notice = self.activate(),
        }
        self.status = notice.unwrap_or_else(|| self.navigator.announcement());
    }

    fn apply_transition(&mut self, transition: Transition<FocusTarget>) {
        if let Transition::Moved {
            from,
            to,
            dismissed,
        } = transition
        {
            info!(from, to, decade = self.navigator.active_entry().decade, "Active entry changed");
            if let Some(target) = dismissed {
                self.restore_focus(target);
            }
        }
    }

    /// Enlarge the active image, remembering the focused control.
    fn open_modal(&mut self) {
        if self.navigator.is_modal_open() {
            return;
        }
        let trigger = self.focus.current().unwrap_or(FocusTarget::Media);
        match self.navigator.open_modal(trigger) {
            Ok(()) => {
                self.focus.trap(vec![FocusTarget::Close]);
                self.swipe.cancel();
                info!(decade = self.navigator.active_entry().decade, %trigger, "Image overlay opened");
            }
            Err(e) => warn!(error = %e, "Refusing to open image overlay"),
        }
    }

    fn close_modal(&mut self) {
        if let Some(target) = self.navigator.close_modal() {
            self.restore_focus(target);
            info!(%target, "Image overlay closed");
        }
    }

    /// Leave the overlay's focus trap and return focus to `target`.
    fn restore_focus(&mut self, target: FocusTarget) {
        self.focus.release();
        if !self.focus.set_focus(target) {
            debug!(%target, "Return focus target no longer on the page");
        }
    }

    /// Activate the focused control. Returns a status notice, if any.
    fn activate(&mut self) -> Option<String> {
        let target = self.focus.current()?;
        if !self.is_enabled(target) {
            debug!(%target, "Ignoring activation of disabled control");
            return None;
        }
        match target {
            FocusTarget::Thumbnail(index) => self.update(Action::SelectIndex(index)),
            FocusTarget::Previous => self.update(Action::StepBackward),
            FocusTarget::Next => self.update(Action::StepForward),
            FocusTarget::Close => self.close_modal(),
            FocusTarget::Media => {
                let entry = *self.navigator.active_entry();
                match entry.media {
                    Media::Image(_) => self.open_modal(),
                    Media::Video(video) => {
                        info!(url = video.embed_url, "Video playback requested");
                        return Some(format!(
                            "{}: {} plays in a web browser at {}",
                            entry.decade, video.title, video.embed_url
                        ));
                    }
                }
            }
        }
        None
    }
}
