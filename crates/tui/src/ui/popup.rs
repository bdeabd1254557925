//! Enlarged image overlay rendering.
//!
//! Responsibilities:
//! - Dim the page behind the overlay and draw the enlarged image frame.
//! - Draw the close control, highlighted when focused.
//!
//! Does NOT handle:
//! - Deciding whether the overlay is mounted (see `App::render`).
//! - Hit testing (see `app::layout::ModalLayout`).

use adtimeline_config::Theme;
use adtimeline_core::{ImageMedia, TimelineEntry};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::layout::ModalLayout;
use crate::ui::theme::ThemeExt;

/// Width of the overlay frame as a percentage of the screen.
pub const POPUP_WIDTH_PERCENT: u16 = 80;
/// Height of the overlay frame as a percentage of the screen.
pub const POPUP_HEIGHT_PERCENT: u16 = 80;

/// Configuration for rendering the image overlay.
pub struct OverlayRenderConfig<'a> {
    pub entry: &'a TimelineEntry,
    pub image: &'a ImageMedia,
    pub layout: ModalLayout,
    pub close_focused: bool,
    pub theme: &'a Theme,
}

/// Render the enlarged image overlay over the whole screen.
pub fn render_image_overlay(f: &mut Frame, config: OverlayRenderConfig) {
    let OverlayRenderConfig {
        entry,
        image,
        layout,
        close_focused,
        theme,
    } = config;

    // Backdrop: clear then dim everything behind the frame.
    f.render_widget(Clear, layout.backdrop);
    f.render_widget(
        Block::default().style(Style::default().bg(theme.overlay)),
        layout.backdrop,
    );

    f.render_widget(Clear, layout.frame);
    let frame = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(Line::from(format!(" {} ", entry.decade)).style(theme.title()))
        .style(Style::default().bg(theme.background));
    f.render_widget(frame, layout.frame);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(layout.image);

    let picture = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Full size advertising in the {}", entry.decade),
            Style::default()
                .fg(theme.media_image)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(image.alt, theme.text())),
        Line::from(Span::styled(image.asset, theme.text_dim())),
        Line::from(Span::styled(entry.example_ad, theme.info())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(picture, rows[1]);

    let close_style = if close_focused {
        theme.focused()
    } else {
        theme.text()
    };
    f.render_widget(
        Paragraph::new(Span::styled("[ x ]", close_style)),
        layout.close,
    );
}

/// Create a centered rectangle with the given percentage of the screen size.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside_and_centered() {
        let area = Rect::new(0, 0, 100, 50);
        let rect = centered_rect(60, 40, area);
        assert_eq!(rect.width, 60);
        assert_eq!(rect.height, 20);
        assert_eq!(rect.x, 20);
        assert_eq!(rect.y, 15);
    }
}
