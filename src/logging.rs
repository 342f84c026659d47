//! Run log setup: every entry goes to an append-mode log file and is
//! mirrored to the console at the same level and format.

use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;
use thiserror::Error;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} - {l} - {m}{n}";

#[derive(Debug, Error)]
pub enum LogInitError {
    #[error("failed to open log file: {0}")]
    LogFile(#[from] std::io::Error),

    #[error("invalid logging configuration: {0}")]
    Config(String),

    #[error("logger already installed: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}

/// Install the process-wide logger with both sinks at INFO level.
///
/// Components log through the `log` facade, so tests can install a
/// capturing logger instead of calling this.
pub fn init(log_path: &Path) -> Result<(), LogInitError> {
    let file = FileAppender::builder()
        .append(true)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(log_path)?;

    let console = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let config = LogConfig::builder()
        .appender(Appender::builder().build("file", Box::new(file)))
        .appender(Appender::builder().build("console", Box::new(console)))
        .build(
            Root::builder()
                .appender("file")
                .appender("console")
                .build(LevelFilter::Info),
        )
        .map_err(|e| LogInitError::Config(e.to_string()))?;

    log4rs::init_config(config)?;
    Ok(())
}
