//! Configuration for the portfolio viewer
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/folio/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod features;
mod observability;
mod scroll;
mod serialization;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (maintain public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use features::{Features, FileFeatures};
pub use observability::{FileLogging, LogRotation, LoggingConfig};
pub use scroll::{FileScroll, ScrollConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Terminal width (columns) below which the mobile layout is used
pub const DEFAULT_COMPACT_WIDTH: u16 = 80;

pub const DEFAULT_THEME: &str = "Rose";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "Rose", "Dark", "Light", "Nord", "Terminal"
    pub theme: String,

    /// Widths below this many columns get the mobile navigation layout
    pub compact_width: u16,

    /// Scroll animation settings
    pub scroll: ScrollConfig,

    /// Feature flags for optional behaviour
    pub features: Features,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            compact_width: DEFAULT_COMPACT_WIDTH,
            scroll: ScrollConfig::default(),
            features: Features::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure; every key is optional
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub compact_width: Option<u16>,

    /// Optional [scroll] section
    pub scroll: Option<FileScroll>,

    /// Optional [features] section
    pub features: Option<FileFeatures>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/folio/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("folio").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        if let Err(e) = std::fs::write(&path, Self::default().to_toml()) {
            tracing::debug!("Could not write config template {}: {}", path.display(), e);
        }
    }

    /// Write the default template, replacing any existing file
    pub fn write_default(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, Self::default().to_toml())
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Read and parse a config file; a missing file yields defaults
    ///
    /// A file that exists but does not parse is an error naming the file.
    /// Falling back to defaults would leave the user debugging the wrong thing.
    pub(crate) fn read_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to read config file {}", path.display()))
            }
        }
    }

    /// Load configuration: env vars > file > defaults
    pub fn load() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::read_file_config(&path)?,
            None => FileConfig::default(),
        };

        Ok(Self::resolve(file, |key| std::env::var(key).ok()))
    }

    /// Merge a parsed file with an environment lookup
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        // Theme: env > file > default
        let theme = env("FOLIO_THEME")
            .or(file.theme)
            .unwrap_or_else(|| DEFAULT_THEME.to_string());

        // Compact width: env > file > default
        let compact_width = env("FOLIO_COMPACT_WIDTH")
            .and_then(|v| v.parse().ok())
            .or(file.compact_width)
            .unwrap_or(DEFAULT_COMPACT_WIDTH);

        let mut scroll = ScrollConfig::from_file(file.scroll);
        if let Some(smooth) = env("FOLIO_SMOOTH_SCROLL").and_then(|v| parse_flag(&v)) {
            scroll.smooth = smooth;
        }

        let features = Features::from_file(file.features);

        let mut logging = LoggingConfig::from_file(file.logging);
        if let Some(level) = env("FOLIO_LOG_LEVEL") {
            logging.level = level;
        }

        Self {
            theme,
            compact_width,
            scroll,
            features,
            logging,
        }
    }
}

/// Parse boolean-ish env values ("1", "true", "yes", "0", "false", "no")
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
