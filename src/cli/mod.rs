//! CLI interface and argument parsing

pub mod commands;

use crate::config::{load_config, LoggingConfig};
use clap::{Parser, Subcommand};

/// Cosmos Bootstrap - ensure Cosmos DB databases and collections exist
#[derive(Parser, Debug)]
#[command(name = "cosmos-bootstrap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "bootstrap.toml", env = "BOOTSTRAP_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "BOOTSTRAP_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log level and logging settings for this run
    ///
    /// `--log-level` wins over `application.log_level`. When the config file
    /// can't be loaded (e.g. before `init`), logging stays console-only at
    /// `info`; the command itself reports the load failure.
    pub fn logging_settings(&self) -> (String, LoggingConfig) {
        let (config_level, logging) = match load_config(&self.config) {
            Ok(config) => (Some(config.application.log_level), config.logging),
            Err(_) => (None, LoggingConfig::default()),
        };

        let level = self
            .log_level
            .clone()
            .or(config_level)
            .unwrap_or_else(|| "info".to_string());
        (level, logging)
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ensure the database and the given collections exist
    Ensure(commands::ensure::EnsureArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
