use std::num::NonZeroU64;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ticker: TickerConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Ticker settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerConfig {
    /// Period between ticks in milliseconds (default: 1000).
    #[serde(default = "default_period_ms")]
    pub period_ms: u64,
}

impl TickerConfig {
    /// The period as the ticker takes it.
    pub fn tick_period(&self) -> Result<NonZeroU64, ConfigError> {
        NonZeroU64::new(self.period_ms).ok_or_else(|| ConfigError::ValidationError {
            message: "ticker.period_ms must be greater than zero".to_string(),
        })
    }
}

/// Presentation settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Start the stopwatch before the first tick.
    #[serde(default)]
    pub autostart: bool,
    /// Line format used by the headless renderer.
    #[serde(default)]
    pub headless_format: OutputFormat,
}

/// Output format of the headless renderer.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `1:05 running`
    #[default]
    Text,
    /// `{"running":true,"time":65,"display":"1:05"}`
    Json,
}

/// Tracing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Without it the terminal UI logs to the cache directory and
    /// headless mode logs to stderr.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_period_ms() -> u64 {
    1000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            period_ms: default_period_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
