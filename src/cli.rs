use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Counter and text field demo built on observable state slices.
#[derive(Debug, Parser)]
#[command(name = "counterview", version, about)]
pub struct Cli {
    /// Path to the config file [default: <config dir>/counterview/config.toml]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the event loop tick in milliseconds
    #[arg(long, value_name = "MS")]
    pub tick_rate_ms: Option<u64>,

    /// Override the log filter (e.g. "debug", "counterview=trace")
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Override the log file path
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply command line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(tick_rate_ms) = self.tick_rate_ms {
            config.ui.tick_rate_ms = tick_rate_ms;
        }
        if let Some(level) = &self.log_level {
            config.log.level = level.clone();
        }
        if let Some(file) = &self.log_file {
            config.log.file = Some(file.clone());
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }
}
