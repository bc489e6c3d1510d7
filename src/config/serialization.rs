//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render this config as a commented TOML file
    pub fn to_toml(&self) -> String {
        format!(
            r#"# folio configuration

# Theme: Rose, Dark, Light, Nord, Terminal
theme = "{theme}"

# Terminals narrower than this get the mobile layout (menu toggle + dropdown)
compact_width = {compact_width}

# Scroll-into-view animation
[scroll]
smooth = {smooth}
frame_ms = {frame_ms}

# Feature flags
[features]
mouse = {mouse}
footer = {footer}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# JSON file logging (in addition to the in-app buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme = self.theme,
            compact_width = self.compact_width,
            smooth = self.scroll.smooth,
            frame_ms = self.scroll.frame_ms,
            mouse = self.features.mouse,
            footer = self.features.footer,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display().to_string().replace('\\', "/"),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
