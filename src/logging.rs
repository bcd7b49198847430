//! log4rs set-up for the binary.

use crate::config::Config;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;

const PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Load the log4rs file if it exists, otherwise log to stderr at the configured level.
pub fn init_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    if config.log_config.exists() {
        log4rs::init_file(&config.log_config, Default::default()).map_err(|e| {
            format!(
                "Error initializing log4rs from {}: {e}",
                config.log_config.display()
            )
        })?;
        log::debug!("Logging from {}", config.log_config.display());
    } else {
        log4rs::init_config(stderr_config(config)?)?;
        log::debug!(
            "No {} found, logging to stderr at {}",
            config.log_config.display(),
            config.log_level
        );
    }
    Ok(())
}

fn stderr_config(config: &Config) -> Result<LogConfig, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();
    let log_config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(config.log_level))?;
    Ok(log_config)
}
