//! Centralized constants for the advertising timeline workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Input Defaults
// =============================================================================

/// Default minimum horizontal travel, in terminal columns, for a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: u16 = 6;

/// Largest accepted swipe threshold in columns.
pub const MAX_SWIPE_THRESHOLD: u16 = 80;

/// Mouse capture is on unless disabled.
pub const DEFAULT_MOUSE_ENABLED: bool = true;

/// Pointer events are treated as mouse input unless configured otherwise.
pub const DEFAULT_TOUCH_INPUT: bool = false;

// =============================================================================
// TUI/UI Defaults
// =============================================================================

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Directory name used for the platform config directory.
pub const APP_DIR_NAME: &str = "ad-timeline";

/// File name of the JSON config file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Base name of the rolling log file.
pub const LOG_FILE_NAME: &str = "ad-timeline.log";

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_CONFIG_PATH: &str = "ADTIMELINE_CONFIG_PATH";
pub const ENV_THEME: &str = "ADTIMELINE_THEME";
pub const ENV_MOUSE: &str = "ADTIMELINE_MOUSE";
pub const ENV_TOUCH: &str = "ADTIMELINE_TOUCH";
pub const ENV_SWIPE_THRESHOLD: &str = "ADTIMELINE_SWIPE_THRESHOLD";
