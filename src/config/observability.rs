//! `[logging]` section: filter level and the optional JSON log file
//!
//! The TUI always captures events in memory for the status bar. The file is
//! an extra sink for anyone who wants the full history of a browsing session.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Values accepted for `level`, lowest to highest severity
const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

const DEFAULT_LEVEL: &str = "info";

/// How often the log file rolls over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    /// One file for every session
    Never,
}

impl LogRotation {
    /// Unknown names keep the daily default
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "hourly" => Self::Hourly,
            "never" => Self::Never,
            _ => Self::Daily,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }

    fn rotation(self) -> Rotation {
        match self {
            Self::Hourly => Rotation::HOURLY,
            Self::Daily => Rotation::DAILY,
            Self::Never => Rotation::NEVER,
        }
    }
}

/// Resolved logging settings
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Always one of `LEVELS`
    pub level: String,
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// File name stem, e.g. "shopfront" -> "shopfront.2026-10-17"
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::Daily,
            file_prefix: env!("CARGO_PKG_NAME").to_string(),
        }
    }
}

/// `[logging]` as written in the config file
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    pub fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            level: file
                .level
                .as_deref()
                .and_then(normalize_level)
                .unwrap_or(defaults.level),
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file
                .file_dir
                .filter(|d| !d.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.file_dir),
            file_rotation: file
                .file_rotation
                .map(|s| LogRotation::parse(&s))
                .unwrap_or(defaults.file_rotation),
            file_prefix: file
                .file_prefix
                .filter(|p| !p.trim().is_empty())
                .unwrap_or(defaults.file_prefix),
        }
    }

    /// EnvFilter directive used when RUST_LOG is not set
    pub fn filter_directive(&self) -> String {
        format!("{}={}", env!("CARGO_PKG_NAME"), self.level)
    }

    /// Rolling appender for the log file, creating its directory first
    pub fn file_appender(&self) -> Result<RollingFileAppender> {
        std::fs::create_dir_all(&self.file_dir)
            .with_context(|| format!("Could not create log directory {:?}", self.file_dir))?;

        RollingFileAppender::builder()
            .rotation(self.file_rotation.rotation())
            .filename_prefix(self.file_prefix.as_str())
            .build(&self.file_dir)
            .with_context(|| format!("Could not open log file in {:?}", self.file_dir))
    }
}

/// Lowercased level name, or None when it is not a known level
fn normalize_level(level: &str) -> Option<String> {
    let level = level.trim().to_ascii_lowercase();
    LEVELS.contains(&level.as_str()).then_some(level)
}
