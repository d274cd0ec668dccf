use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, OutputFormat};

/// Terminal stopwatch driven by a model-view-intent store.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "stopwatch-mvi", version, about)]
pub struct Cli {
    /// Ticker period in milliseconds (overrides ticker.period_ms)
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: Option<u64>,

    /// Start the stopwatch immediately
    #[arg(long)]
    pub autostart: bool,

    /// Read intent tags (START, STOP, TICK) from stdin and print the readout to stdout
    #[arg(long)]
    pub headless: bool,

    /// Line format for headless output (overrides ui.headless_format)
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Config file to load instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file (overrides logging.file)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Load the config file this invocation points at.
    pub fn load_config(&self) -> Result<Config, crate::config::ConfigError> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }

    /// Apply command-line overrides on top of file configuration.
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(tick_ms) = self.tick_ms {
            config.ticker.period_ms = tick_ms;
        }
        if self.autostart {
            config.ui.autostart = true;
        }
        if let Some(format) = self.format {
            config.ui.headless_format = format;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
        config
    }
}
