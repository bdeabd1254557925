//! Environment variable handling for the configuration loader.

use serial_test::serial;

use super::{env_lock, vars_with};
use crate::loader::builder::ConfigLoader;
use crate::loader::env::env_var_or_none;
use crate::loader::error::ConfigError;
use crate::types::ColorTheme;

fn with_env<F: FnOnce()>(overrides: &[(&'static str, Option<&'static str>)], f: F) {
    temp_env::with_vars(vars_with(overrides), f);
}

#[test]
#[serial]
fn test_env_values_applied() {
    let _lock = env_lock().lock().unwrap();

    with_env(
        &[
            ("ADTIMELINE_THEME", Some("high-contrast")),
            ("ADTIMELINE_MOUSE", Some("false")),
            ("ADTIMELINE_TOUCH", Some("1")),
            ("ADTIMELINE_SWIPE_THRESHOLD", Some("10")),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert_eq!(config.theme, ColorTheme::HighContrast);
            assert!(!config.mouse);
            assert!(config.touch_input);
            assert_eq!(config.swipe_threshold, 10);
        },
    );
}

#[test]
#[serial]
fn test_empty_env_vars_ignored() {
    let _lock = env_lock().lock().unwrap();

    with_env(
        &[
            ("ADTIMELINE_THEME", Some("")),
            ("ADTIMELINE_SWIPE_THRESHOLD", Some("   ")),
        ],
        || {
            let config = ConfigLoader::new()
                .with_theme(ColorTheme::Dark)
                .from_env()
                .unwrap()
                .build()
                .unwrap();
            assert_eq!(config.theme, ColorTheme::Dark);
        },
    );
}

#[test]
#[serial]
fn test_whitespace_is_trimmed() {
    let _lock = env_lock().lock().unwrap();

    with_env(&[("ADTIMELINE_THEME", Some("  light  "))], || {
        assert_eq!(
            env_var_or_none("ADTIMELINE_THEME").as_deref(),
            Some("light")
        );
    });
}

#[test]
#[serial]
fn test_invalid_theme_names_the_variable() {
    let _lock = env_lock().lock().unwrap();

    with_env(&[("ADTIMELINE_THEME", Some("neon"))], || {
        let err = ConfigLoader::new().from_env().unwrap_err();
        match err {
            ConfigError::InvalidValue { var, message } => {
                assert_eq!(var, "ADTIMELINE_THEME");
                assert!(message.contains("neon"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    });
}

#[test]
#[serial]
fn test_non_numeric_threshold_rejected() {
    let _lock = env_lock().lock().unwrap();

    with_env(&[("ADTIMELINE_SWIPE_THRESHOLD", Some("-3"))], || {
        let err = ConfigLoader::new().from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref var, .. } if var == "ADTIMELINE_SWIPE_THRESHOLD"
        ));
    });
}
