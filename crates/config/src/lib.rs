//! Configuration management for the advertising timeline TUI.
//!
//! This crate provides the runtime configuration types, the color themes,
//! and a loader that merges a JSON config file, environment variables and
//! explicit overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, ConfigFile, default_config_path, env_var_or_none};
pub use types::{ColorTheme, Config, Theme, UnknownThemeError};
