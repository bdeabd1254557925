//! TUI-specific theme helpers and style builders.
//!
//! This module extends `adtimeline_config::Theme` with ergonomic helpers
//! for building ratatui `Style` objects consistently across the TUI.

use adtimeline_config::Theme;
use ratatui::style::{Modifier, Style};

/// Trait extending Theme with helper methods for creating styled widgets.
pub trait ThemeExt {
    /// Get the base text style.
    fn text(&self) -> Style;
    /// Get dimmed text style.
    fn text_dim(&self) -> Style;
    /// Get title style (title color + bold).
    fn title(&self) -> Style;
    /// Get section heading style.
    fn heading(&self) -> Style;
    /// Get border style.
    fn border(&self) -> Style;
    /// Get border style for the active selection.
    fn border_active(&self) -> Style;
    /// Get style for the control holding keyboard focus.
    fn focused(&self) -> Style;
    /// Get highlight/selection style.
    fn highlight(&self) -> Style;
    fn warning(&self) -> Style;
    fn info(&self) -> Style;
    /// Get disabled style.
    fn disabled(&self) -> Style;
}

impl ThemeExt for Theme {
    fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    fn text_dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    fn title(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    fn heading(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    fn border_active(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    fn focused(&self) -> Style {
        Style::default()
            .fg(self.focus)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    fn highlight(&self) -> Style {
        Style::default().fg(self.highlight_fg).bg(self.highlight_bg)
    }

    fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    fn info(&self) -> Style {
        Style::default().fg(self.info)
    }

    fn disabled(&self) -> Style {
        Style::default()
            .fg(self.disabled)
            .add_modifier(Modifier::DIM)
    }
}
