//! Configuration Tests
//!
//! Environment parsing runs under `temp_env` so variables never leak between tests.

use std::time::Duration;

use crate::config::ExplainerConfig;
use crate::error::AppError;

const ALL_VARS: [&str; 5] = [
    "DOCSPLAIN_MIN_DELAY_MS",
    "DOCSPLAIN_MAX_DELAY_MS",
    "DOCSPLAIN_SHORT_CONTENT_THRESHOLD",
    "DOCSPLAIN_SESSION_TIMEOUT_SECS",
    "DOCSPLAIN_SEED",
];

fn with_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
    let mut kvs: Vec<(&str, Option<&str>)> = ALL_VARS.iter().map(|k| (*k, None)).collect();
    for (key, value) in vars {
        if let Some(slot) = kvs.iter_mut().find(|(k, _)| k == key) {
            slot.1 = Some(*value);
        }
    }
    temp_env::with_vars(kvs, f);
}

#[cfg(test)]
mod env_tests {
    use super::*;

    #[test]
    fn test_empty_environment_gives_defaults() {
        with_env(&[], || {
            let config = ExplainerConfig::from_process_env().unwrap();
            assert_eq!(config, ExplainerConfig::default());
        });
    }

    #[test]
    fn test_overrides_are_applied() {
        with_env(
            &[
                ("DOCSPLAIN_MIN_DELAY_MS", "10"),
                ("DOCSPLAIN_MAX_DELAY_MS", " 20 "),
                ("DOCSPLAIN_SHORT_CONTENT_THRESHOLD", "80"),
                ("DOCSPLAIN_SEED", "42"),
            ],
            || {
                let config = ExplainerConfig::from_process_env().unwrap();
                assert_eq!(config.min_delay(), Duration::from_millis(10));
                assert_eq!(config.max_delay(), Duration::from_millis(20));
                assert_eq!(config.short_content_threshold, 80);
                assert_eq!(config.seed, Some(42));
            },
        );
    }

    #[test]
    fn test_blank_value_falls_back_to_default() {
        with_env(&[("DOCSPLAIN_SEED", "  ")], || {
            assert_eq!(ExplainerConfig::from_process_env().unwrap().seed, None);
        });
    }

    #[test]
    fn test_unparseable_value_rejected() {
        with_env(&[("DOCSPLAIN_MAX_DELAY_MS", "soon")], || {
            let err = ExplainerConfig::from_process_env().unwrap_err();
            assert!(matches!(err, AppError::Config(ref msg) if msg.contains("DOCSPLAIN_MAX_DELAY_MS")));
        });
    }

    #[test]
    fn test_out_of_range_value_rejected() {
        with_env(&[("DOCSPLAIN_SHORT_CONTENT_THRESHOLD", "0")], || {
            assert!(matches!(
                ExplainerConfig::from_process_env(),
                Err(AppError::Config(_))
            ));
        });
    }

    #[test]
    fn test_inverted_delay_window_rejected() {
        with_env(
            &[("DOCSPLAIN_MIN_DELAY_MS", "500"), ("DOCSPLAIN_MAX_DELAY_MS", "100")],
            || {
                assert!(ExplainerConfig::from_process_env().is_err());
            },
        );
    }

    #[test]
    fn test_timeout_shorter_than_max_delay_rejected() {
        with_env(
            &[("DOCSPLAIN_MAX_DELAY_MS", "60000"), ("DOCSPLAIN_SESSION_TIMEOUT_SECS", "1")],
            || {
                assert!(matches!(
                    ExplainerConfig::from_process_env(),
                    Err(AppError::Config(_))
                ));
            },
        );
    }
}
