//! Configuration loading for the TUI.
//!
//! Responsibilities:
//! - Load configuration from `.env`, the config file and environment variables.
//! - Apply CLI overrides on top.
//!
//! Does NOT handle:
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - Configuration precedence: CLI args > env vars > config file > defaults.
//! - `load_dotenv()` is called before loading configuration.

use anyhow::{Context, Result};
use adtimeline_config::{Config, ConfigLoader};

use crate::cli::Cli;

/// Load the runtime configuration for this invocation.
///
/// # Errors
///
/// Fails on a malformed `.env` file, an unreadable or invalid config file,
/// an invalid environment value or an out-of-range swipe threshold.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let loader = ConfigLoader::new()
        .load_dotenv()
        .context("Failed to load .env file")?;

    // Blank paths fall through to the env var and platform default.
    let loader = match &cli.config_path {
        Some(path) if !path.as_os_str().to_string_lossy().trim().is_empty() => {
            loader.with_config_path(path.clone())
        }
        _ => loader,
    };

    let mut loader = loader
        .from_file()
        .context("Failed to read config file")?
        .from_env()
        .context("Failed to read configuration from environment")?;

    if let Some(theme) = cli.theme {
        loader = loader.with_theme(theme);
    }
    if cli.no_mouse {
        loader = loader.with_mouse(false);
    }
    if cli.touch {
        loader = loader.with_touch_input(true);
    }
    if let Some(threshold) = cli.swipe_threshold {
        loader = loader.with_swipe_threshold(threshold);
    }

    let config = loader.build().context("Invalid configuration")?;
    tracing::info!(
        theme = %config.theme,
        mouse = config.mouse,
        touch_input = config.touch_input,
        swipe_threshold = config.swipe_threshold,
        "Configuration loaded"
    );
    Ok(config)
}
