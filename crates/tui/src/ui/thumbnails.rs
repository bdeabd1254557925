//! Thumbnail strip rendering.
//!
//! One bordered button per entry showing its icon glyph and decade. The
//! active entry gets the accent border; the focused button is reversed.

use adtimeline_config::Theme;
use adtimeline_core::TimelineEntry;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::theme::ThemeExt;

/// Configuration for rendering the thumbnail strip.
pub struct ThumbnailRenderConfig<'a> {
    pub entries: &'a [TimelineEntry],
    /// Cell rectangles, parallel to `entries`.
    pub cells: &'a [Rect],
    pub active_index: usize,
    /// Index of the focused thumbnail, if a thumbnail holds focus.
    pub focused_index: Option<usize>,
    pub theme: &'a Theme,
}

pub fn render_thumbnails(f: &mut Frame, config: ThumbnailRenderConfig) {
    let ThumbnailRenderConfig {
        entries,
        cells,
        active_index,
        focused_index,
        theme,
    } = config;

    for (index, (entry, cell)) in entries.iter().zip(cells).enumerate() {
        let active = index == active_index;
        let border_style = if active {
            theme.border_active()
        } else {
            theme.border()
        };
        let label_style = if focused_index == Some(index) {
            theme.focused()
        } else if active {
            theme.highlight()
        } else {
            theme.text()
        };
        let icon_style = if active {
            theme.heading()
        } else {
            theme.text_dim()
        };

        let button = Paragraph::new(vec![
            Line::from(Span::styled(entry.icon.glyph().to_string(), icon_style)),
            Line::from(Span::styled(entry.decade, label_style)),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        f.render_widget(button, *cell);
    }
}
