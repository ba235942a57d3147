//! Configuration handling for the registration form

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the simulated submission latency
pub const LATENCY_ENV: &str = "WEBINAR_SUBMIT_LATENCY_MS";
/// Environment variable forcing the simulated submission to fail
pub const FAILURE_ENV: &str = "WEBINAR_SIMULATE_FAILURE";

const DEFAULT_SUBMIT_LATENCY_MS: u64 = 2000;
const DEFAULT_RESET_DELAY_MS: u64 = 5000;
const DEFAULT_REVALIDATE_DELAY_MS: u64 = 500;
const DEFAULT_NOTIFICATION_MS: u64 = 5000;
const DEFAULT_LOG_FILTER: &str = "webinar_form=warn";

/// User configuration for the form
///
/// Every field is optional; accessors fall back to built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Simulated network delay before the registration service answers
    pub submit_latency_ms: Option<u64>,
    /// Make the simulated registration service fail
    pub simulate_failure: Option<bool>,
    /// How long the success message stays before the form resets
    pub reset_delay_ms: Option<u64>,
    /// Quiet period after typing before a field is revalidated
    pub revalidate_delay_ms: Option<u64>,
    /// How long error notifications stay visible
    pub notification_ms: Option<u64>,
    /// tracing filter directive used when RUST_LOG is unset
    pub log_filter: Option<String>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "webinar", "webinar-form")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load configuration from `path`, returning defaults when the file is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Apply overrides looked up by environment variable name
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup(LATENCY_ENV) {
            match value.trim().parse() {
                Ok(ms) => self.submit_latency_ms = Some(ms),
                Err(_) => tracing::warn!(%value, "Ignoring invalid {LATENCY_ENV}"),
            }
        }
        if let Some(value) = lookup(FAILURE_ENV) {
            self.simulate_failure = Some(matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            ));
        }
    }

    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms.unwrap_or(DEFAULT_SUBMIT_LATENCY_MS))
    }

    pub fn simulate_failure_or_default(&self) -> bool {
        self.simulate_failure.unwrap_or(false)
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms.unwrap_or(DEFAULT_RESET_DELAY_MS))
    }

    pub fn revalidate_delay(&self) -> Duration {
        Duration::from_millis(
            self.revalidate_delay_ms
                .unwrap_or(DEFAULT_REVALIDATE_DELAY_MS),
        )
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms.unwrap_or(DEFAULT_NOTIFICATION_MS))
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
