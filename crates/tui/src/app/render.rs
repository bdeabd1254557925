//! Rendering logic for the TUI app.
//!
//! Responsibilities:
//! - Render the page (header, thumbnail strip, detail, status, footer)
//! - Mount the image overlay over the page while it is open
//!
//! Non-responsibilities:
//! - Does NOT handle input
//! - Does NOT mutate app state (except for remembering the frame area)

use ratatui::{
    Frame,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::app::layout::{ModalLayout, ScreenLayout};
use crate::focus::FocusTarget;
use crate::ui::detail::{DetailRenderConfig, render_detail};
use crate::ui::popup::{OverlayRenderConfig, render_image_overlay};
use crate::ui::theme::ThemeExt;
use crate::ui::thumbnails::{ThumbnailRenderConfig, render_thumbnails};

/// Page heading shown in the header row.
pub const APP_TITLE: &str = "Evolution of Advertising";

impl App {
    /// Render the application UI.
    pub fn render(&mut self, f: &mut Frame) {
        self.last_area = f.area();
        let layout = ScreenLayout::calculate(self.last_area, self.navigator.len());
        let theme = self.theme;

        let header = Paragraph::new(Line::from(vec![
            Span::styled(APP_TITLE, theme.title()),
            Span::raw(" - "),
            Span::styled(
                format!("{} decades", self.navigator.len()),
                theme.text_dim(),
            ),
        ]));
        f.render_widget(header, layout.header);

        // Page controls show focus only while the overlay is closed.
        let page_focus = if self.focus.is_trapped() {
            None
        } else {
            self.focus.current()
        };
        let focused_index = match page_focus {
            Some(FocusTarget::Thumbnail(index)) => Some(index),
            _ => None,
        };

        render_thumbnails(
            f,
            ThumbnailRenderConfig {
                entries: self.navigator.entries(),
                cells: &layout.thumbnails,
                active_index: self.navigator.active_index(),
                focused_index,
                theme: &theme,
            },
        );

        let entry = *self.navigator.active_entry();
        render_detail(
            f,
            DetailRenderConfig {
                entry: &entry,
                layout: &layout,
                can_step_backward: self.navigator.can_step_backward(),
                can_step_forward: self.navigator.can_step_forward(),
                focus: page_focus,
                theme: &theme,
            },
        );

        // Mounted only while open; nothing of the overlay exists otherwise.
        if self.navigator.is_modal_open()
            && let Some(image) = entry.media.as_image()
        {
            render_image_overlay(
                f,
                OverlayRenderConfig {
                    entry: &entry,
                    image,
                    layout: ModalLayout::calculate(self.last_area),
                    close_focused: self.focus.is_focused(FocusTarget::Close),
                    theme: &theme,
                },
            );
        }

        // Status and hints stay readable above the backdrop.
        let status = Paragraph::new(Line::from(Span::styled(
            format!(" {}", self.status),
            theme.info(),
        )));
        f.render_widget(status, layout.status);

        f.render_widget(Paragraph::new(self.footer_line()), layout.footer);
    }

    fn footer_line(&self) -> Line<'static> {
        let theme = &self.theme;
        let mut spans = Vec::new();
        for (index, (keys, description)) in crate::input::keymap::footer_hints(self.input_scope())
            .into_iter()
            .enumerate()
        {
            if index > 0 {
                spans.push(Span::styled(" | ", theme.text_dim()));
            }
            spans.push(Span::styled(keys.to_string(), theme.heading()));
            spans.push(Span::styled(format!(":{description}"), theme.text()));
        }
        spans.insert(0, Span::raw(" "));
        Line::from(spans)
    }
}
