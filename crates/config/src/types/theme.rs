//! Theme types for the timeline TUI configuration.
//!
//! Responsibilities:
//! - Define user-selectable color themes (`ColorTheme`).
//! - Define the expanded runtime `Theme` with all color values.
//! - Provide conversion from `ColorTheme` to `Theme`.
//!
//! Does NOT handle:
//! - Actual rendering (see TUI crate).
//!
//! Invariants:
//! - `ColorTheme` is the configured representation; `Theme` is the runtime representation.
//! - `Theme` is intentionally NOT serializable.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// User-selectable color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    #[default]
    Default,
    Light,
    Dark,
    HighContrast,
    Monochrome,
}

/// Returned when a theme name does not match any `ColorTheme`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme '{0}' (expected default, light, dark, high_contrast or monochrome)")]
pub struct UnknownThemeError(pub String);

impl ColorTheme {
    pub const ALL: [ColorTheme; 5] = [
        Self::Default,
        Self::Light,
        Self::Dark,
        Self::HighContrast,
        Self::Monochrome,
    ];

    /// Human-readable display name for UI surfaces.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::HighContrast => "High Contrast",
            Self::Monochrome => "Monochrome",
        }
    }

    /// Next theme in the cycle.
    pub fn cycle_next(self) -> Self {
        match self {
            Self::Default => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::HighContrast,
            Self::HighContrast => Self::Monochrome,
            Self::Monochrome => Self::Default,
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ColorTheme {
    type Err = UnknownThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "default" => Ok(Self::Default),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "high_contrast" | "highcontrast" => Ok(Self::HighContrast),
            "monochrome" | "mono" => Ok(Self::Monochrome),
            _ => Err(UnknownThemeError(s.to_string())),
        }
    }
}

/// Expanded runtime theme.
///
/// Invariants:
/// - This is intentionally **not serialized**. Configure `ColorTheme` and expand on startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // Global / chrome
    pub background: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub title: Color,
    pub accent: Color,

    // Selection / focus
    pub highlight_fg: Color,
    pub highlight_bg: Color,
    pub focus: Color,
    pub disabled: Color,

    // Semantics
    pub info: Color,
    pub warning: Color,

    // Media panels and the modal overlay
    pub media_image: Color,
    pub media_video: Color,
    pub overlay: Color,
}

impl Theme {
    /// Expand a configured `ColorTheme` into a full runtime palette.
    pub fn from_color_theme(theme: ColorTheme) -> Self {
        match theme {
            ColorTheme::Default => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::Cyan,
                title: Color::Cyan,
                accent: Color::Yellow,

                highlight_fg: Color::Yellow,
                highlight_bg: Color::DarkGray,
                focus: Color::LightBlue,
                disabled: Color::DarkGray,

                info: Color::Cyan,
                warning: Color::Yellow,

                media_image: Color::LightYellow,
                media_video: Color::LightRed,
                overlay: Color::Black,
            },
            ColorTheme::Light => Self {
                background: Color::White,
                text: Color::Black,
                text_dim: Color::Gray,
                border: Color::Blue,
                title: Color::Blue,
                accent: Color::Magenta,

                highlight_fg: Color::Black,
                highlight_bg: Color::Gray,
                focus: Color::Magenta,
                disabled: Color::Gray,

                info: Color::Blue,
                warning: Color::Yellow,

                media_image: Color::Magenta,
                media_video: Color::Red,
                overlay: Color::Gray,
            },
            ColorTheme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::Indexed(110), // soft blue/cyan
                title: Color::Indexed(110),
                accent: Color::Indexed(214), // orange-ish

                highlight_fg: Color::White,
                highlight_bg: Color::Indexed(236),
                focus: Color::Indexed(75),
                disabled: Color::DarkGray,

                info: Color::Indexed(110),
                warning: Color::Yellow,

                media_image: Color::Indexed(223),
                media_video: Color::Indexed(174),
                overlay: Color::Indexed(233),
            },
            ColorTheme::HighContrast => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::White,
                title: Color::White,
                accent: Color::Yellow,

                highlight_fg: Color::White,
                highlight_bg: Color::Blue,
                focus: Color::Yellow,
                disabled: Color::Gray,

                info: Color::Cyan,
                warning: Color::Yellow,

                media_image: Color::Yellow,
                media_video: Color::Cyan,
                overlay: Color::Black,
            },
            ColorTheme::Monochrome => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::Gray,
                title: Color::White,
                accent: Color::White,

                highlight_fg: Color::Black,
                highlight_bg: Color::White,
                focus: Color::White,
                disabled: Color::DarkGray,

                info: Color::White,
                warning: Color::White,

                media_image: Color::White,
                media_video: Color::Gray,
                overlay: Color::Black,
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color_theme(ColorTheme::Default)
    }
}

impl From<ColorTheme> for Theme {
    fn from(theme: ColorTheme) -> Self {
        Self::from_color_theme(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_visits_every_theme() {
        let mut theme = ColorTheme::Default;
        for _ in 0..ColorTheme::ALL.len() {
            theme = theme.cycle_next();
        }
        assert_eq!(theme, ColorTheme::Default);
    }

    #[test]
    fn test_parse_accepts_common_spellings() {
        assert_eq!("dark".parse::<ColorTheme>(), Ok(ColorTheme::Dark));
        assert_eq!(" Light ".parse::<ColorTheme>(), Ok(ColorTheme::Light));
        assert_eq!(
            "high-contrast".parse::<ColorTheme>(),
            Ok(ColorTheme::HighContrast)
        );
        assert_eq!(
            "HIGH_CONTRAST".parse::<ColorTheme>(),
            Ok(ColorTheme::HighContrast)
        );
        assert_eq!("mono".parse::<ColorTheme>(), Ok(ColorTheme::Monochrome));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "solarized".parse::<ColorTheme>().unwrap_err();
        assert_eq!(err, UnknownThemeError("solarized".to_string()));
        assert!(err.to_string().contains("solarized"));
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&ColorTheme::HighContrast).unwrap();
        assert_eq!(json, "\"high_contrast\"");
        let parsed: ColorTheme = serde_json::from_str("\"monochrome\"").unwrap();
        assert_eq!(parsed, ColorTheme::Monochrome);
    }

    #[test]
    fn test_focus_differs_from_border() {
        for theme in ColorTheme::ALL {
            let expanded = Theme::from_color_theme(theme);
            if theme != ColorTheme::Monochrome {
                assert_ne!(expanded.focus, expanded.border, "{theme}");
            }
        }
    }
}
