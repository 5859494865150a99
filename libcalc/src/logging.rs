//! Centralized logging configuration for calc binaries
//!
//! Provides consistent logging setup with support for:
//! - Text, JSON, and pretty-printed output
//! - Environment variable configuration
//! - Per-module log level filtering
//! - Writing to a log file, for front ends that own the terminal
//!
//! # Examples
//!
//! ```no_run
//! use libcalc::logging::{LoggingConfig, LogFormat};
//!
//! // Initialize with JSON format
//! let config = LoggingConfig::new(LogFormat::Json, "info".to_string(), false);
//! config.init().unwrap();
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;
use crate::error::{CalcError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text output (no colors, for piping)
    #[default]
    Text,
    /// Machine-parseable JSON (one JSON object per line)
    Json,
    /// Pretty-printed with colors (for development)
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(format!(
                "Invalid log format: '{}'. Valid options: text, json, pretty",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
    pub level: String,
    pub verbose: bool,
    /// Append to this file instead of writing to stderr
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Create a new logging configuration
    ///
    /// # Arguments
    ///
    /// * `format` - Log output format (text, json, or pretty)
    /// * `level` - Minimum log level (error, warn, info, debug, trace)
    /// * `verbose` - If true, defaults to debug level
    pub fn new(format: LogFormat, level: String, verbose: bool) -> Self {
        Self {
            format,
            level,
            verbose,
            file: None,
        }
    }

    /// Send output to a file
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Build from the `[logging]` section of the config file
    pub fn from_settings(settings: &LoggingSettings) -> Self {
        Self {
            format: settings.format,
            level: settings.level.clone(),
            verbose: false,
            file: settings.file.as_deref().map(expand_path),
        }
    }

    /// Effective filter directive when `RUST_LOG` is not set
    pub fn default_directive(&self) -> &str {
        if self.verbose {
            "debug"
        } else {
            &self.level
        }
    }

    /// Build the event filter: `RUST_LOG` if set, else the configured level
    ///
    /// The configured level is checked either way, so a typo in it is
    /// reported instead of silently filtering everything out.
    pub fn filter(&self) -> Result<EnvFilter> {
        let directive = self.default_directive();
        let level: LevelFilter = directive.parse().map_err(|_| {
            CalcError::InvalidInput(format!(
                "Invalid log level: '{}'. Valid options: off, error, warn, info, debug, trace",
                directive
            ))
        })?;

        Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string())))
    }

    /// Initialize logging with the configured settings
    ///
    /// This should be called once at the start of your program. Fails if
    /// the level is invalid, the log file cannot be opened or a global
    /// subscriber is already set.
    pub fn init(&self) -> Result<()> {
        let filter = self.filter()?;

        let (writer, ansi) = match &self.file {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        CalcError::Logging(format!(
                            "Failed to create log directory {}: {}",
                            parent.display(),
                            e
                        ))
                    })?;
                }
                let file = std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| {
                        CalcError::Logging(format!(
                            "Failed to open log file {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                (BoxMakeWriter::new(Mutex::new(file)), false)
            }
            None => (BoxMakeWriter::new(std::io::stderr), true),
        };

        let result = match self.format {
            LogFormat::Json => {
                // One JSON object per line
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_current_span(true)
                    .with_span_list(true)
                    .flatten_event(true)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .try_init()
            }
            LogFormat::Pretty => tracing_subscriber::fmt()
                .pretty()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(ansi)
                .with_target(true)
                .with_line_number(true)
                .with_file(true)
                .try_init(),
            LogFormat::Text => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false)
                .with_level(true)
                .try_init(),
        };

        result.map_err(|e| CalcError::Logging(e.to_string()))
    }
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);

        // Case insensitive
        assert_eq!("TEXT".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("Json".parse::<LogFormat>().unwrap(), LogFormat::Json);
    }

    #[test]
    fn test_log_format_from_str_invalid() {
        let result = "invalid".parse::<LogFormat>();
        assert!(result
            .unwrap_err()
            .contains("Invalid log format: 'invalid'"));
    }

    #[test]
    fn test_log_format_display() {
        assert_eq!(LogFormat::Text.to_string(), "text");
        assert_eq!(LogFormat::Json.to_string(), "json");
        assert_eq!(LogFormat::Pretty.to_string(), "pretty");
    }

    #[test]
    fn test_logging_config_new() {
        let config = LoggingConfig::new(LogFormat::Json, "warn".to_string(), true);
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, "warn");
        assert!(config.file.is_none());
        // Verbose overrides the level
        assert_eq!(config.default_directive(), "debug");
    }

    #[test]
    fn test_logging_config_from_settings() {
        let settings = LoggingSettings {
            format: LogFormat::Pretty,
            level: "trace".to_string(),
            file: Some("/tmp/calc/calc.log".to_string()),
        };

        let config = LoggingConfig::from_settings(&settings);
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.default_directive(), "trace");
        assert_eq!(config.file, Some(PathBuf::from("/tmp/calc/calc.log")));
    }

    #[test]
    #[serial]
    fn test_filter_accepts_known_levels() {
        for level in ["off", "error", "WARN", "info", "debug", "trace"] {
            let config = LoggingConfig::new(LogFormat::Text, level.to_string(), false);
            assert!(config.filter().is_ok(), "level {}", level);
        }
    }

    #[test]
    #[serial]
    fn test_filter_rejects_unknown_level() {
        let config = LoggingConfig::new(LogFormat::Text, "loud".to_string(), false);

        match config.filter() {
            Err(CalcError::InvalidInput(message)) => assert!(message.contains("'loud'")),
            other => panic!("Expected CalcError::InvalidInput, got {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_init_rejects_unknown_level_before_opening_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calc.log");
        let config =
            LoggingConfig::new(LogFormat::Json, "chatty".to_string(), false).with_file(&path);

        let error = config.init().unwrap_err();
        assert_eq!(error.exit_code(), 3);
        assert!(!path.exists());
    }
}
