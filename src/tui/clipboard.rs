//! System clipboard access
//!
//! Link activation copies the URI here. `arboard` covers Windows, macOS and
//! Linux; a clipboard handle is opened per copy and dropped right after.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard
///
/// Fails without a display server (headless Linux, SSH sessions).
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .with_context(|| format!("Failed to copy {} characters to clipboard", text.chars().count()))?;
    Ok(())
}
