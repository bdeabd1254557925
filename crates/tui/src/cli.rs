//! Command-line argument parsing for ad-timeline.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide parsed CLI arguments to the main application.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `runtime::config`).
//! - Terminal state management (see `runtime::terminal`).
//! - Environment variable parsing (handled by `adtimeline_config`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - All path arguments are resolved relative to the current working directory.

use adtimeline_config::ColorTheme;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for ad-timeline.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --theme, --swipe-threshold)
/// 2. Environment variables (e.g., ADTIMELINE_THEME)
/// 3. Configuration file (config.json)
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "ad-timeline",
    about = "Interactive slideshow of advertising history, 1960s to 2020s",
    version,
    after_help = "Examples:\n  ad-timeline\n  ad-timeline --theme high_contrast\n  ad-timeline --config-path ~/.config/ad-timeline/config.json\n  ad-timeline --touch --swipe-threshold 10\n  ad-timeline --log-dir /tmp/ad-timeline --no-mouse\n"
)]
pub struct Cli {
    /// Path to a custom configuration file
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    /// Color theme (default, light, dark, high_contrast, monochrome)
    #[arg(long)]
    pub theme: Option<ColorTheme>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,

    /// Treat pointer drags as touch input so horizontal swipes step entries
    #[arg(long)]
    pub touch: bool,

    /// Minimum horizontal drag, in columns, recognized as a swipe
    #[arg(long)]
    pub swipe_threshold: Option<u16>,
}
