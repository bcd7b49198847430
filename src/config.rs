//! Runtime configuration from the environment.
//!
//! `.env` is loaded by the binary before [`Config::from_env`] runs.

use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

pub const ENV_LOG_CONFIG: &str = "IPV4_CALC_LOG_CONFIG";
pub const ENV_LOG_LEVEL: &str = "IPV4_CALC_LOG_LEVEL";
pub const ENV_FORMAT: &str = "IPV4_CALC_FORMAT";

/// How results are written to stdout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// log4rs YAML file, used when it exists.
    pub log_config: PathBuf,
    /// Level for the built-in stderr logger.
    pub log_level: LevelFilter,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: PathBuf::from("log4rs.yml"),
            log_level: LevelFilter::Warn,
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    pub fn from_env() -> Config {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unknown values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = lookup(ENV_LOG_CONFIG) {
            config.log_config = PathBuf::from(path);
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            match LevelFilter::from_str(level.trim()) {
                Ok(level) => config.log_level = level,
                Err(_) => eprintln!("Ignoring {ENV_LOG_LEVEL}={level}: unknown level"),
            }
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            match OutputFormat::from_str(&format) {
                Ok(format) => config.format = format,
                Err(e) => eprintln!("Ignoring {ENV_FORMAT}: {e}"),
            }
        }
        config
    }
}
