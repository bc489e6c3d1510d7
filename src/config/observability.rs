//! `[logging]` section: filter level and the optional JSON log file

use serde::Deserialize;
use std::path::PathBuf;

/// How often the JSON log file rolls over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    /// One file for every run
    Never,
}

impl LogRotation {
    const NAMES: [(LogRotation, &'static str); 3] = [
        (LogRotation::Hourly, "hourly"),
        (LogRotation::Daily, "daily"),
        (LogRotation::Never, "never"),
    ];

    /// Case-insensitive; anything unrecognised rotates daily
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        Self::NAMES
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(s))
            .map(|(rotation, _)| *rotation)
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        Self::NAMES
            .iter()
            .find(|(rotation, _)| rotation == self)
            .map_or("daily", |(_, name)| *name)
    }
}

/// Resolved logging settings
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directive for the `folio` target (`RUST_LOG` wins over it)
    pub level: String,
    /// Also write JSON lines to `file_dir`
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// File name stem, e.g. "folio" -> "folio.2025-01-15"
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::Daily,
            file_prefix: "folio".to_string(),
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
    /// Fill unset file keys from the defaults
    pub fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            level: file.level.unwrap_or(defaults.level),
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file.file_dir.map_or(defaults.file_dir, PathBuf::from),
            file_rotation: file
                .file_rotation
                .as_deref()
                .map_or(defaults.file_rotation, LogRotation::parse),
            file_prefix: file.file_prefix.unwrap_or(defaults.file_prefix),
        }
    }
}
