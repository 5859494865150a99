//! Configuration management for calc
//!
//! Every section and field has a default, so an absent or partial config
//! file is fine. A file that exists but does not parse is an error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::format::SymbolStyle;
use crate::logging::LogFormat;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub input: InputConfig,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Use `÷` rather than `/` for divide
    pub unicode: bool,
    pub colors: bool,
    /// Show the last evaluated result in the status bar
    pub read_back: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Capture mouse clicks on the keypad
    pub mouse: bool,
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub format: LogFormat,
    pub level: String,
    /// Log file path; `~` is expanded
    pub file: Option<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            unicode: true,
            colors: true,
            read_back: true,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            mouse: false,
            tick_rate_ms: 100,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            level: "info".to_string(),
            file: None,
        }
    }
}

impl DisplayConfig {
    pub fn symbol_style(&self) -> SymbolStyle {
        if self.unicode {
            SymbolStyle::Unicode
        } else {
            SymbolStyle::Ascii
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        Self::load_or_default(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        Self::from_toml(&content)
    }

    /// Load from `path`, or fall back to defaults if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(path)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("CALC_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("calc").join("config.toml"))
}
