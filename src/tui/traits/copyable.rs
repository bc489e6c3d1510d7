//! Copyable trait for components that provide clipboard content

use super::Component;

/// Trait for components that can provide content for the clipboard
///
/// Link activation hands the URI to the system clipboard; the focused
/// component's `Copyable` implementation decides what that URI is.
pub trait Copyable: Component {
    /// Text for the clipboard, `None` when there is nothing to copy
    fn copy_text(&self) -> Option<String>;

    /// Short description of what will be copied (for toast messages)
    ///
    /// Default: uses component ID.
    fn copy_description(&self) -> String {
        format!("{:?}", self.id())
    }
}

/// Result of a copy operation
#[derive(Debug, Clone)]
pub enum CopyResult {
    /// Copied; carries what was copied for the toast
    Success(String),
    /// Nothing to copy (no focused link)
    Empty,
    /// Clipboard access failed
    Error(String),
}

impl CopyResult {
    pub fn success(description: impl Into<String>) -> Self {
        Self::Success(description.into())
    }

    /// Create an error result
    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error(msg.into())
    }

    /// Get a toast message for this result
    pub fn toast_message(&self) -> String {
        match self {
            Self::Success(description) => format!("✓ Copied {}", description),
            Self::Empty => "Nothing to copy".to_string(),
            Self::Error(msg) => format!("✗ {}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_messages() {
        let ok = CopyResult::success("tel:9909242453");
        assert_eq!(ok.toast_message(), "✓ Copied tel:9909242453");

        assert_eq!(CopyResult::Empty.toast_message(), "Nothing to copy");

        let err = CopyResult::error("Clipboard unavailable");
        assert_eq!(err.toast_message(), "✗ Clipboard unavailable");
    }
}
