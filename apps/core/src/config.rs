//! Engine configuration.
//!
//! Values come from the process environment (optionally seeded from a `.env`
//! file). Every field has a default so an empty environment is valid.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;
use validator::Validate;

use crate::error::AppError;

const ENV_MIN_DELAY_MS: &str = "DOCSPLAIN_MIN_DELAY_MS";
const ENV_MAX_DELAY_MS: &str = "DOCSPLAIN_MAX_DELAY_MS";
const ENV_SHORT_CONTENT_THRESHOLD: &str = "DOCSPLAIN_SHORT_CONTENT_THRESHOLD";
const ENV_SESSION_TIMEOUT_SECS: &str = "DOCSPLAIN_SESSION_TIMEOUT_SECS";
const ENV_SEED: &str = "DOCSPLAIN_SEED";

/// Tunables for the explanation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ExplainerConfig {
    /// Lower bound (inclusive) of the simulated processing delay.
    #[validate(range(max = 60000))]
    pub min_delay_ms: u64,
    /// Upper bound (exclusive) of the simulated processing delay.
    #[validate(range(min = 1, max = 60000))]
    pub max_delay_ms: u64,
    /// Trimmed inputs shorter than this many characters get the short-content fallback.
    #[validate(range(min = 1, max = 10000))]
    pub short_content_threshold: usize,
    /// How long a session waits for a reply before giving up.
    #[validate(range(min = 1, max = 600))]
    pub session_timeout_secs: u64,
    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for ExplainerConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: 1_000,
            max_delay_ms: 3_500,
            short_content_threshold: 50,
            session_timeout_secs: 30,
            seed: None,
        }
    }
}

impl ExplainerConfig {
    /// Loads the configuration from `.env` (if present) and the environment.
    pub fn from_env() -> Result<Self, AppError> {
        dotenv::dotenv().ok();
        Self::from_process_env()
    }

    /// Loads the configuration from the process environment only.
    pub fn from_process_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        let config = Self {
            min_delay_ms: read_var(ENV_MIN_DELAY_MS)?.unwrap_or(defaults.min_delay_ms),
            max_delay_ms: read_var(ENV_MAX_DELAY_MS)?.unwrap_or(defaults.max_delay_ms),
            short_content_threshold: read_var(ENV_SHORT_CONTENT_THRESHOLD)?
                .unwrap_or(defaults.short_content_threshold),
            session_timeout_secs: read_var(ENV_SESSION_TIMEOUT_SECS)?
                .unwrap_or(defaults.session_timeout_secs),
            seed: read_var(ENV_SEED)?,
        };
        config.check()?;
        debug!(?config, "Loaded explainer configuration");
        Ok(config)
    }

    /// Field-level validation plus the cross-field delay and timeout rules.
    pub fn check(&self) -> Result<(), AppError> {
        self.validate()?;
        if self.min_delay_ms >= self.max_delay_ms {
            return Err(AppError::Config(format!(
                "min delay ({} ms) must be below max delay ({} ms)",
                self.min_delay_ms, self.max_delay_ms
            )));
        }
        if self.session_timeout() <= self.max_delay() {
            return Err(AppError::Config(format!(
                "session timeout ({} s) must exceed max delay ({} ms)",
                self.session_timeout_secs, self.max_delay_ms
            )));
        }
        Ok(())
    }

    pub fn min_delay(&self) -> Duration {
        Duration::from_millis(self.min_delay_ms)
    }

    pub fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_delay_ms)
    }

    pub fn session_timeout(&self) -> Duration {
        Duration::from_secs(self.session_timeout_secs)
    }
}

fn read_var<T>(name: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| AppError::Config(format!("{} has invalid value '{}': {}", name, raw, e))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(AppError::Config(format!("{}: {}", name, e))),
    }
}
