//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the shell works without a config file.

use crate::navigation::timer::DEFAULT_SPLASH_DELAY;
use crate::navigation::Locale;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Screen timing and language settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_splash_delay_ms")]
    pub splash_delay_ms: u64,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default)]
    pub locale: Locale,
}

impl UiConfig {
    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_delay_ms)
    }

    /// Tick interval, never below 10ms.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            splash_delay_ms: default_splash_delay_ms(),
            tick_rate_ms: default_tick_rate_ms(),
            locale: Locale::default(),
        }
    }
}

/// Diagnostic log settings. The terminal belongs to the UI, so logs go to a
/// file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_level")]
    pub level: String,
    /// Overrides the platform data directory.
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_level(),
            log_dir: None,
        }
    }
}

impl LoggingConfig {
    pub fn resolved_log_dir(&self) -> PathBuf {
        match &self.log_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("tabshell")
                .join("logs"),
        }
    }
}

fn default_splash_delay_ms() -> u64 {
    DEFAULT_SPLASH_DELAY.as_millis() as u64
}
fn default_tick_rate_ms() -> u64 {
    100
}
fn default_true() -> bool {
    true
}
fn default_level() -> String {
    "info".to_string()
}
