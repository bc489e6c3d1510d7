//! Scroll animation configuration

use serde::Deserialize;
use std::time::Duration;

/// How scroll-into-view requests are animated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollConfig {
    /// Animate toward the target (true) or jump there instantly (false)
    pub smooth: bool,

    /// Milliseconds between animation frames
    pub frame_ms: u64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth: true,
            frame_ms: 16,
        }
    }
}

/// Scroll settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileScroll {
    pub smooth: Option<bool>,
    pub frame_ms: Option<u64>,
}

impl ScrollConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileScroll>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            smooth: file.smooth.unwrap_or(defaults.smooth),
            // A zero interval would spin the event loop
            frame_ms: file.frame_ms.unwrap_or(defaults.frame_ms).max(1),
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}
