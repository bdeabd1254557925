//! Focus management for the slideshow controls.
//!
//! Provides a `FocusManager` that tracks which control has keyboard focus,
//! cycles through controls with Tab/Shift+Tab, and traps focus inside the
//! image overlay while it is open.
//!
//! Invariants:
//! - There is always at least one scope (the page scope).
//! - Only the innermost scope is navigable; outer scopes keep their position.
//! - Navigation skips controls the caller reports as disabled.

use std::fmt;

/// A focusable control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// Thumbnail button for the entry at this index.
    Thumbnail(usize),
    /// Previous-entry control in the detail header.
    Previous,
    /// Next-entry control in the detail header.
    Next,
    /// The image or video panel of the active entry.
    Media,
    /// Close control of the image overlay.
    Close,
}

impl fmt::Display for FocusTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Thumbnail(index) => write!(f, "thumbnail {}", index + 1),
            Self::Previous => f.write_str("previous"),
            Self::Next => f.write_str("next"),
            Self::Media => f.write_str("media"),
            Self::Close => f.write_str("close"),
        }
    }
}

#[derive(Debug, Clone)]
struct FocusScope {
    /// Ordered list of controls that can receive focus.
    order: Vec<FocusTarget>,
    /// Index of the currently focused control in `order`.
    current: usize,
}

impl FocusScope {
    fn new(order: Vec<FocusTarget>) -> Self {
        Self { order, current: 0 }
    }
}

/// Manages focus state across the page and any trapping overlay.
#[derive(Debug, Clone)]
pub struct FocusManager {
    /// Scope stack; the last entry is active.
    scopes: Vec<FocusScope>,
}

impl FocusManager {
    /// Create a focus manager with an explicit page order.
    pub fn new(page_order: Vec<FocusTarget>) -> Self {
        Self {
            scopes: vec![FocusScope::new(page_order)],
        }
    }

    /// Page order for a timeline of `entry_count` entries: thumbnails, then
    /// Previous, Next and the media panel.
    pub fn for_timeline(entry_count: usize) -> Self {
        let mut order: Vec<FocusTarget> = (0..entry_count).map(FocusTarget::Thumbnail).collect();
        order.extend([FocusTarget::Previous, FocusTarget::Next, FocusTarget::Media]);
        Self::new(order)
    }

    fn scope(&self) -> &FocusScope {
        // The page scope is never popped.
        &self.scopes[self.scopes.len() - 1]
    }

    fn scope_mut(&mut self) -> &mut FocusScope {
        let last = self.scopes.len() - 1;
        &mut self.scopes[last]
    }

    /// The currently focused control, if the active scope has any.
    pub fn current(&self) -> Option<FocusTarget> {
        let scope = self.scope();
        scope.order.get(scope.current).copied()
    }

    /// Check if a specific control is currently focused.
    pub fn is_focused(&self, target: FocusTarget) -> bool {
        self.current() == Some(target)
    }

    /// Move focus to the next enabled control, wrapping around.
    pub fn next(&mut self, enabled: impl Fn(FocusTarget) -> bool) {
        self.step(1, enabled);
    }

    /// Move focus to the previous enabled control, wrapping around.
    pub fn prev(&mut self, enabled: impl Fn(FocusTarget) -> bool) {
        self.step(-1, enabled);
    }

    fn step(&mut self, direction: isize, enabled: impl Fn(FocusTarget) -> bool) {
        let scope = self.scope_mut();
        let len = scope.order.len();
        if len == 0 {
            return;
        }
        let mut index = scope.current;
        for _ in 0..len {
            index = if direction > 0 {
                (index + 1) % len
            } else if index == 0 {
                len - 1
            } else {
                index - 1
            };
            if enabled(scope.order[index]) {
                scope.current = index;
                return;
            }
        }
    }

    /// Set focus to a control in the active scope.
    ///
    /// Returns false, leaving focus unchanged, if the control is not part of
    /// the active scope.
    pub fn set_focus(&mut self, target: FocusTarget) -> bool {
        let scope = self.scope_mut();
        match scope.order.iter().position(|t| *t == target) {
            Some(index) => {
                scope.current = index;
                true
            }
            None => false,
        }
    }

    /// Trap focus inside `order`, focusing its first control.
    pub fn trap(&mut self, order: Vec<FocusTarget>) {
        self.scopes.push(FocusScope::new(order));
    }

    /// Release the innermost trap. The page scope cannot be released.
    pub fn release(&mut self) -> bool {
        if self.scopes.len() > 1 {
            self.scopes.pop();
            true
        } else {
            false
        }
    }

    /// Whether focus is currently trapped by an overlay.
    pub fn is_trapped(&self) -> bool {
        self.scopes.len() > 1
    }

    /// Controls of the active scope in traversal order.
    pub fn active_order(&self) -> &[FocusTarget] {
        &self.scope().order
    }

    /// Get the number of focusable controls in the active scope.
    pub fn len(&self) -> usize {
        self.scope().order.len()
    }

    /// Check if the active scope has no focusable controls.
    pub fn is_empty(&self) -> bool {
        self.scope().order.is_empty()
    }
}

impl Default for FocusManager {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn always(_: FocusTarget) -> bool {
        true
    }

    #[test]
    fn test_timeline_order() {
        let fm = FocusManager::for_timeline(2);
        assert_eq!(
            fm.active_order(),
            &[
                FocusTarget::Thumbnail(0),
                FocusTarget::Thumbnail(1),
                FocusTarget::Previous,
                FocusTarget::Next,
                FocusTarget::Media,
            ]
        );
        assert!(fm.is_focused(FocusTarget::Thumbnail(0)));
    }

    #[test]
    fn test_focus_navigation_wraps() {
        let mut fm = FocusManager::new(vec![
            FocusTarget::Previous,
            FocusTarget::Next,
            FocusTarget::Media,
        ]);

        fm.next(always);
        assert!(fm.is_focused(FocusTarget::Next));
        fm.next(always);
        fm.next(always);
        assert!(fm.is_focused(FocusTarget::Previous)); // Wrap around

        fm.prev(always);
        assert!(fm.is_focused(FocusTarget::Media)); // Wrap backward
    }

    #[test]
    fn test_disabled_controls_are_skipped() {
        let mut fm = FocusManager::for_timeline(1);
        let enabled = |t: FocusTarget| !matches!(t, FocusTarget::Previous | FocusTarget::Next);

        fm.next(enabled);
        assert!(fm.is_focused(FocusTarget::Media));
        fm.next(enabled);
        assert!(fm.is_focused(FocusTarget::Thumbnail(0)));
        fm.prev(enabled);
        assert!(fm.is_focused(FocusTarget::Media));
    }

    #[test]
    fn test_nothing_enabled_keeps_focus() {
        let mut fm = FocusManager::for_timeline(2);
        fm.next(|_| false);
        assert!(fm.is_focused(FocusTarget::Thumbnail(0)));
    }

    #[test]
    fn test_set_focus_outside_scope_fails() {
        let mut fm = FocusManager::for_timeline(3);
        assert!(fm.set_focus(FocusTarget::Media));
        assert!(!fm.set_focus(FocusTarget::Close));
        assert!(fm.is_focused(FocusTarget::Media));
    }

    #[test]
    fn test_trap_and_release() {
        let mut fm = FocusManager::for_timeline(3);
        fm.set_focus(FocusTarget::Media);

        fm.trap(vec![FocusTarget::Close]);
        assert!(fm.is_trapped());
        assert!(fm.is_focused(FocusTarget::Close));
        fm.next(always);
        fm.prev(always);
        assert!(fm.is_focused(FocusTarget::Close));
        assert!(!fm.set_focus(FocusTarget::Thumbnail(0)));

        assert!(fm.release());
        assert!(!fm.is_trapped());
        assert!(fm.is_focused(FocusTarget::Media));
        assert!(!fm.release());
    }

    #[test]
    fn test_empty_manager() {
        let mut fm = FocusManager::default();
        fm.next(always);
        assert!(fm.is_empty());
        assert_eq!(fm.current(), None);
    }
}
