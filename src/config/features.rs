//! Feature flags configuration
//!
//! Feature flags for optional behaviour (opt-out: default enabled).

use serde::Deserialize;

/// Feature flags for optional behaviour (opt-out: default enabled)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Features {
    /// Mouse capture: click nav entries, wheel scrolling
    pub mouse: bool,

    /// Render the footer block at the end of the page
    pub footer: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            mouse: true,
            footer: true,
        }
    }
}

/// Feature flags as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileFeatures {
    pub mouse: Option<bool>,
    pub footer: Option<bool>,
}

impl Features {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileFeatures>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            mouse: file.mouse.unwrap_or(defaults.mouse),
            footer: file.footer.unwrap_or(defaults.footer),
        }
    }
}
