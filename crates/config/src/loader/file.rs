//! JSON config file loading.
//!
//! Responsibilities:
//! - Resolve the platform config file location.
//! - Read and parse the optional JSON config file.
//!
//! Does NOT handle:
//! - Writing the file back; the timeline has no persisted state.
//!
//! Invariants:
//! - A missing file at the default location is not an error.
//! - A missing file at an explicitly requested location is an error.
//! - Unknown keys are rejected so typos surface at startup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};
use crate::types::ColorTheme;

/// On-disk representation of the config file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ColorTheme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mouse: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub touch_input: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_threshold: Option<u16>,
}

/// Returns the default path to the configuration file.
///
/// - Linux: `~/.config/ad-timeline/config.json`
/// - macOS: `~/Library/Application Support/ad-timeline/config.json`
/// - Windows: `%AppData%\ad-timeline\config\config.json`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_DIR_NAME).ok_or_else(|| {
        ConfigError::ConfigDirUnavailable("no home directory for this user".to_string())
    })?;

    Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Read and parse a config file.
pub(crate) fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ConfigError::ConfigFileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::ConfigFileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    serde_json::from_str(&contents).map_err(|source| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply the config file, if any, to the loader.
pub fn apply_file(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let (path, explicit) = match loader.config_path() {
        Some(path) => (path.clone(), true),
        None => (default_config_path()?, false),
    };

    let file = match read_config_file(&path) {
        Ok(file) => file,
        Err(ConfigError::ConfigFileNotFound { .. }) if !explicit => {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    tracing::debug!(path = %path.display(), "Loaded config file");

    if let Some(theme) = file.theme {
        loader.set_theme(Some(theme));
    }
    if let Some(mouse) = file.mouse {
        loader.set_mouse(Some(mouse));
    }
    if let Some(touch) = file.touch_input {
        loader.set_touch_input(Some(touch));
    }
    if let Some(threshold) = file.swipe_threshold {
        loader.set_swipe_threshold(Some(threshold));
    }
    Ok(())
}
