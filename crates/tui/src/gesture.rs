//! Pointer gesture recognition.
//!
//! Responsibilities:
//! - Turn a press/drag/release sequence into either a tap or a horizontal swipe.
//!
//! Does NOT handle:
//! - Hit testing taps against the layout (see `app::mouse`).
//! - Deciding whether the terminal pointer is a touchscreen (configuration).
//!
//! Invariants:
//! - Only `PointerKind::Touch` sequences can produce swipes.
//! - A sequence yields exactly one outcome; a swipe replaces the tap.
//! - Releases without a preceding press yield nothing.

/// Origin of a pointer sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Touch,
    Mouse,
}

impl PointerKind {
    /// Classification of terminal pointer events for the configured device.
    pub fn from_touch_input(touch_input: bool) -> Self {
        if touch_input { Self::Touch } else { Self::Mouse }
    }
}

/// Horizontal swipe direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right to left.
    Left,
    /// Finger moved left to right.
    Right,
}

/// Result of a completed pointer sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// A press and release, reported at the press position.
    Tap { column: u16, row: u16 },
    Swipe(SwipeDirection),
}

#[derive(Debug, Clone, Copy)]
struct Press {
    kind: PointerKind,
    column: u16,
    row: u16,
}

/// Tracks one pointer sequence at a time.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: u16,
    press: Option<Press>,
    last: (u16, u16),
}

impl SwipeTracker {
    /// `threshold` is the minimum horizontal travel in columns.
    pub fn new(threshold: u16) -> Self {
        Self {
            threshold: threshold.max(1),
            press: None,
            last: (0, 0),
        }
    }

    pub fn threshold(&self) -> u16 {
        self.threshold
    }

    /// Start a sequence, discarding any unfinished one.
    pub fn press(&mut self, kind: PointerKind, column: u16, row: u16) {
        self.press = Some(Press { kind, column, row });
        self.last = (column, row);
    }

    /// Record an intermediate position.
    pub fn drag(&mut self, column: u16, row: u16) {
        if self.press.is_some() {
            self.last = (column, row);
        }
    }

    /// Finish the sequence.
    pub fn release(&mut self, column: u16, row: u16) -> Option<Gesture> {
        self.last = (column, row);
        let press = self.press.take()?;

        if press.kind == PointerKind::Touch {
            let dx = i32::from(column) - i32::from(press.column);
            let dy = i32::from(row) - i32::from(press.row);
            if dx.unsigned_abs() >= u32::from(self.threshold) && dx.abs() > dy.abs() {
                let direction = if dx < 0 {
                    SwipeDirection::Left
                } else {
                    SwipeDirection::Right
                };
                tracing::debug!(dx, dy, ?direction, "Swipe recognized");
                return Some(Gesture::Swipe(direction));
            }
        }

        Some(Gesture::Tap {
            column: press.column,
            row: press.row,
        })
    }

    /// Abandon the current sequence.
    pub fn cancel(&mut self) {
        self.press = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.press.is_some()
    }
}
