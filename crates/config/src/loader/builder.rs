//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from the config file, environment variables, and direct builder methods.
//! - Validate and build the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Config file parsing (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - Sources overwrite in call order; callers apply file, then env, then CLI overrides.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::PathBuf;

use super::env::{apply_env, env_config_path};
use super::error::ConfigError;
use super::file::apply_file;
use crate::constants::MAX_SWIPE_THRESHOLD;
use crate::types::{ColorTheme, Config};

/// Configuration loader that builds config from files, environment variables and flags.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    theme: Option<ColorTheme>,
    mouse: Option<bool>,
    touch_input: Option<bool>,
    swipe_threshold: Option<u16>,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Use an explicit config file. A missing explicit file is an error.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read the config file.
    ///
    /// Uses the explicit path if set, then `ADTIMELINE_CONFIG_PATH`, then the
    /// platform default.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        if self.config_path.is_none() {
            self.config_path = env_config_path();
        }
        apply_file(&mut self)?;
        Ok(self)
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    pub fn with_theme(mut self, theme: ColorTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse = Some(enabled);
        self
    }

    pub fn with_touch_input(mut self, enabled: bool) -> Self {
        self.touch_input = Some(enabled);
        self
    }

    pub fn with_swipe_threshold(mut self, columns: u16) -> Self {
        self.swipe_threshold = Some(columns);
        self
    }

    /// Get the config path (if set).
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn set_theme(&mut self, theme: Option<ColorTheme>) {
        self.theme = theme;
    }

    pub(crate) fn set_mouse(&mut self, mouse: Option<bool>) {
        self.mouse = mouse;
    }

    pub(crate) fn set_touch_input(&mut self, touch: Option<bool>) {
        self.touch_input = touch;
    }

    pub(crate) fn set_swipe_threshold(&mut self, threshold: Option<u16>) {
        self.swipe_threshold = threshold;
    }

    /// Build the final configuration, filling gaps with defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSwipeThreshold` when the threshold is
    /// zero or above `MAX_SWIPE_THRESHOLD`.
    pub fn build(self) -> Result<Config, ConfigError> {
        let defaults = Config::default();
        let swipe_threshold = self.swipe_threshold.unwrap_or(defaults.swipe_threshold);
        if !(1..=MAX_SWIPE_THRESHOLD).contains(&swipe_threshold) {
            return Err(ConfigError::InvalidSwipeThreshold {
                message: format!(
                    "must be between 1 and {} (got {})",
                    MAX_SWIPE_THRESHOLD, swipe_threshold
                ),
            });
        }

        Ok(Config {
            theme: self.theme.unwrap_or(defaults.theme),
            mouse: self.mouse.unwrap_or(defaults.mouse),
            touch_input: self.touch_input.unwrap_or(defaults.touch_input),
            swipe_threshold,
        })
    }
}
