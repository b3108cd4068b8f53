//! Display preferences.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::RwLock;
use tracing::debug;

use crate::error::AppError;

/// Storage key for the theme preference
pub const THEME_KEY: &str = "docexplainer-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(AppError::Validation(format!("unknown theme '{}'", other))),
        }
    }
}

/// In-memory string key-value store.
#[derive(Debug, Default)]
pub struct PreferenceStore {
    values: RwLock<HashMap<String, String>>,
}

impl PreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .ok()
            .and_then(|values| values.get(key).cloned())
    }

    pub fn set(&self, key: &str, value: impl Into<String>) -> Result<(), AppError> {
        let mut values = self
            .values
            .write()
            .map_err(|e| AppError::Internal(format!("preference store poisoned: {}", e)))?;
        values.insert(key.to_string(), value.into());
        Ok(())
    }

    /// Stored theme; missing or unrecognized values fall back to dark.
    pub fn theme(&self) -> ThemePreference {
        self.get(THEME_KEY)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    /// Flips the theme, persists it and returns the new value.
    pub fn toggle_theme(&self) -> Result<ThemePreference, AppError> {
        let next = self.theme().toggled();
        self.set(THEME_KEY, next.as_str())?;
        debug!(theme = %next, "Theme toggled");
        Ok(next)
    }
}
