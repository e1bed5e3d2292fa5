//! Platform logging initialization for story_search.
//!
//! Defaults to a log file so records do not interleave with the terminal UI.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogDestination {
    /// Write to the configured log file.
    #[default]
    File,
    /// Write to the terminal (stderr for warnings and errors).
    Terminal,
    /// Write to both file and terminal.
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub destination: LogDestination,
    pub file: PathBuf,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            destination: LogDestination::File,
            file: PathBuf::from("./story_search.log"),
            level: "info".to_string(),
        }
    }
}

/// Initialize the logger as described by `logging`.
pub fn initialize(logging: &LoggingConfig) {
    let level = logging.level.parse().unwrap_or_else(|_| {
        eprintln!(
            "Warning: Unknown log level {:?}, using info",
            logging.level
        );
        LevelFilter::Info
    });

    let config = build_config();

    let loggers: Vec<Box<dyn SharedLogger>> = match logging.destination {
        LogDestination::File => {
            if let Some(file_logger) = create_file_logger(&logging.file, level, config) {
                vec![file_logger]
            } else {
                return;
            }
        }
        LogDestination::Terminal => {
            vec![TermLogger::new(
                level,
                config,
                TerminalMode::Mixed,
                ColorChoice::Auto,
            )]
        }
        LogDestination::Both => {
            let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
                level,
                config.clone(),
                TerminalMode::Mixed,
                ColorChoice::Auto,
            )];
            if let Some(file_logger) = create_file_logger(&logging.file, level, config) {
                loggers.push(file_logger);
            }
            loggers
        }
    };

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(
    log_path: &Path,
    level: LevelFilter,
    config: Config,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
            None
        }
    }
}
