//! Property-based tests for configuration loading.
//!
//! Test coverage:
//! - Swipe threshold validation accepts exactly `1..=MAX_SWIPE_THRESHOLD`.
//! - Theme parsing is insensitive to case, padding and separator style.
//! - Config file parsing preserves whichever fields are present.

use proptest::prelude::*;

use adtimeline_config::constants::MAX_SWIPE_THRESHOLD;
use adtimeline_config::{ColorTheme, ConfigFile, ConfigLoader};

fn theme_strategy() -> impl Strategy<Value = ColorTheme> {
    prop::sample::select(ColorTheme::ALL.to_vec())
}

proptest! {
    #[test]
    fn swipe_threshold_validation(threshold in any::<u16>()) {
        let result = ConfigLoader::new().with_swipe_threshold(threshold).build();
        let valid = (1..=MAX_SWIPE_THRESHOLD).contains(&threshold);
        prop_assert_eq!(result.is_ok(), valid);
        if let Ok(config) = result {
            prop_assert_eq!(config.swipe_threshold, threshold);
        }
    }

    #[test]
    fn theme_parse_ignores_case_and_padding(
        theme in theme_strategy(),
        upper in any::<bool>(),
        pad in 0usize..3,
    ) {
        let serialized = serde_json::to_string(&theme).unwrap();
        let name = serialized.trim_matches('"');
        let name = if upper { name.to_uppercase() } else { name.to_string() };
        let padded = format!("{}{}{}", " ".repeat(pad), name.replace('_', "-"), " ".repeat(pad));
        prop_assert_eq!(padded.parse::<ColorTheme>(), Ok(theme));
    }

    #[test]
    fn config_file_keeps_present_fields(
        theme in proptest::option::of(theme_strategy()),
        mouse in proptest::option::of(any::<bool>()),
        threshold in proptest::option::of(1u16..=MAX_SWIPE_THRESHOLD),
    ) {
        let file = ConfigFile { theme, mouse, touch_input: None, swipe_threshold: threshold };
        let json = serde_json::to_string(&file).unwrap();
        let parsed: ConfigFile = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, file);
    }
}
