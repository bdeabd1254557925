//! Screen layout calculation for rendering and hit-testing.
//!
//! Responsibilities:
//! - Calculate the rectangles of every interactive element (thumbnails,
//!   previous/next controls, media panel, overlay close control).
//! - Provide consistent layout information for both rendering and mouse hit-testing.
//!
//! Does NOT handle:
//! - Does NOT render anything (see render.rs and `ui`)
//! - Does NOT handle mouse events (see mouse.rs)
//!
//! Invariants:
//! - Layout is a pure function of the terminal area and the entry count.
//! - Render and hit-testing must use the same `ScreenLayout`/`ModalLayout`.

use ratatui::layout::{Constraint, Direction, Layout, Margin, Position, Rect};

use crate::focus::FocusTarget;
use crate::ui::popup::{POPUP_HEIGHT_PERCENT, POPUP_WIDTH_PERCENT, centered_rect};

/// Height of the title line.
pub const HEADER_HEIGHT: u16 = 1;
/// Height of the thumbnail strip (bordered buttons with icon and decade).
pub const THUMBNAIL_HEIGHT: u16 = 4;
/// Preferred width of one thumbnail button.
pub const THUMBNAIL_WIDTH: u16 = 9;
/// Columns between thumbnail buttons.
pub const THUMBNAIL_GAP: u16 = 1;
/// Height of the status (announcement) line.
pub const STATUS_HEIGHT: u16 = 1;
/// Height of the key hint footer.
pub const FOOTER_HEIGHT: u16 = 1;
/// Width of the previous/next controls.
pub const CONTROL_WIDTH: u16 = 8;
/// Width of the media panel in the side-by-side layout.
pub const MEDIA_WIDTH: u16 = 34;
/// Height of the media panel in the stacked layout.
pub const MEDIA_HEIGHT: u16 = 7;
/// Inner detail width from which text and media sit side by side.
pub const WIDE_LAYOUT_MIN_WIDTH: u16 = 72;
/// Width of the overlay close control: "[ x ]".
pub const CLOSE_WIDTH: u16 = 5;

/// Rectangles of the slideshow page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub thumbnail_strip: Rect,
    /// One rectangle per entry, in entry order.
    pub thumbnails: Vec<Rect>,
    /// The bordered detail card.
    pub detail: Rect,
    pub previous: Rect,
    pub decade: Rect,
    pub next: Rect,
    /// Title, description, key event, iconic ad and impact.
    pub text: Rect,
    /// Image or video panel.
    pub media: Rect,
    pub status: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn calculate(area: Rect, entry_count: usize) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(THUMBNAIL_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_HEIGHT),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        let thumbnail_strip = rows[1];
        let detail = rows[2];

        let inner = detail.inner(Margin::new(1, 1));
        let card = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // controls
                Constraint::Length(1), // spacer
                Constraint::Min(0),    // body
            ])
            .split(inner);

        let controls = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CONTROL_WIDTH),
                Constraint::Min(0),
                Constraint::Length(CONTROL_WIDTH),
            ])
            .split(card[0]);

        let body = card[2];
        let (text, media) = if body.width >= WIDE_LAYOUT_MIN_WIDTH {
            let split = Layout::default()
                .direction(Direction::Horizontal)
                .spacing(2)
                .constraints([Constraint::Min(0), Constraint::Length(MEDIA_WIDTH)])
                .split(body);
            (split[0], split[1])
        } else {
            let split = Layout::default()
                .direction(Direction::Vertical)
                .spacing(1)
                .constraints([Constraint::Min(0), Constraint::Length(MEDIA_HEIGHT)])
                .split(body);
            (split[0], split[1])
        };

        Self {
            header: rows[0],
            thumbnail_strip,
            thumbnails: thumbnail_cells(thumbnail_strip, entry_count),
            detail,
            previous: controls[0],
            decade: controls[1],
            next: controls[2],
            text,
            media,
            status: rows[3],
            footer: rows[4],
        }
    }

    /// The control under a pointer position, if any.
    pub fn hit(&self, column: u16, row: u16) -> Option<FocusTarget> {
        let position = Position::new(column, row);
        if let Some(index) = self.thumbnails.iter().position(|r| r.contains(position)) {
            return Some(FocusTarget::Thumbnail(index));
        }
        if self.previous.contains(position) {
            Some(FocusTarget::Previous)
        } else if self.next.contains(position) {
            Some(FocusTarget::Next)
        } else if self.media.contains(position) {
            Some(FocusTarget::Media)
        } else {
            None
        }
    }
}

/// Centered, evenly spaced thumbnail cells; cells shrink when the strip is narrow.
fn thumbnail_cells(strip: Rect, count: usize) -> Vec<Rect> {
    let Ok(count_u16) = u16::try_from(count) else {
        return Vec::new();
    };
    if count_u16 == 0 || strip.width == 0 {
        return Vec::new();
    }

    let gaps = THUMBNAIL_GAP.saturating_mul(count_u16 - 1);
    let width = THUMBNAIL_WIDTH.min(strip.width.saturating_sub(gaps) / count_u16);
    if width == 0 {
        return Vec::new();
    }

    let total = width * count_u16 + gaps;
    let start = strip.x + strip.width.saturating_sub(total) / 2;
    (0..count_u16)
        .map(|i| Rect::new(start + i * (width + THUMBNAIL_GAP), strip.y, width, strip.height))
        .collect()
}

/// What a pointer position over the open overlay refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayHit {
    Close,
    /// The enlarged image frame; inert.
    Image,
    /// The dimmed background outside the frame.
    Backdrop,
}

/// Rectangles of the enlarged image overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalLayout {
    /// Full-screen backdrop.
    pub backdrop: Rect,
    /// Bordered frame holding the image.
    pub frame: Rect,
    /// Content area inside the frame border.
    pub image: Rect,
    pub close: Rect,
}

impl ModalLayout {
    pub fn calculate(area: Rect) -> Self {
        let frame = centered_rect(POPUP_WIDTH_PERCENT, POPUP_HEIGHT_PERCENT, area);
        let close = Rect::new(
            frame.right().saturating_sub(CLOSE_WIDTH + 1),
            frame.y,
            CLOSE_WIDTH,
            1,
        )
        .intersection(frame);

        Self {
            backdrop: area,
            frame,
            image: frame.inner(Margin::new(1, 1)),
            close,
        }
    }

    pub fn hit(&self, column: u16, row: u16) -> OverlayHit {
        let position = Position::new(column, row);
        if self.close.contains(position) {
            OverlayHit::Close
        } else if self.frame.contains(position) {
            OverlayHit::Image
        } else {
            OverlayHit::Backdrop
        }
    }
}
