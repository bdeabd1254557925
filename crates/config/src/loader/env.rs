//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `ADTIMELINE_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Loading the config file (see file.rs).
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Environment variables take precedence over config file settings.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Unparseable values return ConfigError::InvalidValue.

use std::path::PathBuf;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_CONFIG_PATH, ENV_MOUSE, ENV_SWIPE_THRESHOLD, ENV_THEME, ENV_TOUCH,
};
use crate::types::ColorTheme;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Parse a boolean flag, accepting the spellings people put in shells.
fn parse_flag(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be true or false".to_string(),
        }),
    }
}

/// Config path from the environment, if the caller did not set one.
pub(crate) fn env_config_path() -> Option<PathBuf> {
    env_var_or_none(ENV_CONFIG_PATH).map(PathBuf::from)
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(theme) = env_var_or_none(ENV_THEME) {
        let parsed: ColorTheme = theme.parse().map_err(|e| ConfigError::InvalidValue {
            var: ENV_THEME.to_string(),
            message: format!("{e}"),
        })?;
        loader.set_theme(Some(parsed));
    }
    if let Some(mouse) = env_var_or_none(ENV_MOUSE) {
        loader.set_mouse(Some(parse_flag(ENV_MOUSE, &mouse)?));
    }
    if let Some(touch) = env_var_or_none(ENV_TOUCH) {
        loader.set_touch_input(Some(parse_flag(ENV_TOUCH, &touch)?));
    }
    if let Some(threshold) = env_var_or_none(ENV_SWIPE_THRESHOLD) {
        let value: u16 = threshold.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_SWIPE_THRESHOLD.to_string(),
            message: "must be a positive integer".to_string(),
        })?;
        loader.set_swipe_threshold(Some(value));
    }
    Ok(())
}
