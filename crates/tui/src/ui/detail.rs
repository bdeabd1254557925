//! Detail card rendering.
//!
//! Renders the decade header with previous/next controls, the entry text,
//! and either the image panel or the video panel.

use adtimeline_config::Theme;
use adtimeline_core::{Media, TimelineEntry};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::layout::ScreenLayout;
use crate::focus::FocusTarget;
use crate::ui::theme::ThemeExt;

/// Configuration for rendering the detail card.
pub struct DetailRenderConfig<'a> {
    pub entry: &'a TimelineEntry,
    pub layout: &'a ScreenLayout,
    pub can_step_backward: bool,
    pub can_step_forward: bool,
    /// Control holding keyboard focus on the page, if any.
    pub focus: Option<FocusTarget>,
    pub theme: &'a Theme,
}

pub fn render_detail(f: &mut Frame, config: DetailRenderConfig) {
    let DetailRenderConfig {
        entry,
        layout,
        can_step_backward,
        can_step_forward,
        focus,
        theme,
    } = config;

    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border()),
        layout.detail,
    );

    let control_style = |enabled: bool, target: FocusTarget| {
        if focus == Some(target) {
            theme.focused()
        } else if enabled {
            theme.text()
        } else {
            theme.disabled()
        }
    };
    f.render_widget(
        Paragraph::new(Span::styled(
            "◀ Prev",
            control_style(can_step_backward, FocusTarget::Previous),
        )),
        layout.previous,
    );
    f.render_widget(
        Paragraph::new(Span::styled(
            "Next ▶",
            control_style(can_step_forward, FocusTarget::Next),
        ))
        .alignment(Alignment::Right),
        layout.next,
    );
    f.render_widget(
        Paragraph::new(Span::styled(entry.decade, theme.title())).alignment(Alignment::Center),
        layout.decade,
    );

    let heading = |text: &'static str| Line::from(Span::styled(text, theme.heading()));
    let body = |text: &'static str| Line::from(Span::styled(text, theme.text()));
    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            entry.title,
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )),
        body(entry.description),
        Line::from(""),
        heading("Key Event:"),
        body(entry.key_event),
        Line::from(""),
        heading("Iconic Ad:"),
        body(entry.example_ad),
        Line::from(""),
        heading("Impact:"),
        body(entry.impact),
    ])
    .wrap(Wrap { trim: true });
    f.render_widget(text, layout.text);

    render_media(f, entry, layout, focus == Some(FocusTarget::Media), theme);
}

fn render_media(
    f: &mut Frame,
    entry: &TimelineEntry,
    layout: &ScreenLayout,
    focused: bool,
    theme: &Theme,
) {
    let border_style = if focused {
        Style::default().fg(theme.focus).add_modifier(Modifier::BOLD)
    } else {
        theme.border()
    };

    let (title, color, lines) = match &entry.media {
        Media::Image(image) => (
            " Image ",
            theme.media_image,
            vec![
                Line::from(Span::styled(
                    format!("Advertising in the {}", entry.decade),
                    Style::default().fg(theme.media_image),
                )),
                Line::from(Span::styled(image.asset, theme.text_dim())),
                Line::from(""),
                Line::from(Span::styled("Enter or click to enlarge", theme.info())),
            ],
        ),
        Media::Video(video) => (
            " Video ",
            theme.media_video,
            vec![
                Line::from(Span::styled(
                    format!("▶ {}", video.title),
                    Style::default().fg(theme.media_video),
                )),
                Line::from(Span::styled(video.embed_url, theme.text_dim())),
                Line::from(""),
                Line::from(Span::styled("Plays in a web browser", theme.info())),
            ],
        ),
    };

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(Line::from(title).style(Style::default().fg(color))),
        );
    f.render_widget(panel, layout.media);
}
