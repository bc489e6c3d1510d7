//! Keyboard handling for focusable components
//!
//! Input reaches a component only after the App's own layers (help modal,
//! global keys, open menu) have passed on it. The component reports back
//! whether it used the key.

use super::{Component, Scrollable};
use crossterm::event::{KeyCode, KeyEvent};

/// Whether a component consumed a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Yes,
    No,
}

impl From<bool> for Handled {
    fn from(handled: bool) -> Self {
        if handled {
            Self::Yes
        } else {
            Self::No
        }
    }
}

/// A component that takes keyboard focus
///
/// ```text
/// KeyEvent
///    │
///    ▼
/// App: help modal, then q ? t m 1-6
///    │
///    ▼
/// Dropdown menu (when open in the compact layout)
///    │
///    ▼
/// App: Enter / y act on the page's focused target
///    │
///    ▼
/// Focused component ── Handled::Yes | Handled::No
/// ```
pub trait Interactive: Component {
    fn handle_key(&mut self, key: KeyEvent) -> Handled;

    /// Key hint for the status bar while focused
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}

/// Organic scroll movements and the keys bound to them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollKey {
    LineUp,
    LineDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
}

impl ScrollKey {
    pub fn from_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Up | KeyCode::Char('k') => Some(Self::LineUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Self::LineDown),
            KeyCode::PageUp => Some(Self::PageUp),
            KeyCode::PageDown | KeyCode::Char(' ') => Some(Self::PageDown),
            KeyCode::Home | KeyCode::Char('g') => Some(Self::Top),
            KeyCode::End | KeyCode::Char('G') => Some(Self::Bottom),
            _ => None,
        }
    }
}

/// Shared scroll key handling for anything both interactive and scrollable
pub trait ScrollableInteractive: Interactive + Scrollable {
    fn handle_scroll_keys(&mut self, key: KeyEvent) -> Handled {
        let Some(movement) = ScrollKey::from_code(key.code) else {
            return Handled::No;
        };

        match movement {
            ScrollKey::LineUp => self.scroll_up(),
            ScrollKey::LineDown => self.scroll_down(),
            ScrollKey::PageUp => self.page_up(),
            ScrollKey::PageDown => self.page_down(),
            ScrollKey::Top => self.scroll_to_top(),
            ScrollKey::Bottom => self.scroll_to_bottom(),
        }
        Handled::Yes
    }
}

impl<T: Interactive + Scrollable> ScrollableInteractive for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vim_and_arrow_keys_agree() {
        assert_eq!(ScrollKey::from_code(KeyCode::Char('k')), ScrollKey::from_code(KeyCode::Up));
        assert_eq!(ScrollKey::from_code(KeyCode::Char('G')), Some(ScrollKey::Bottom));
        assert_eq!(ScrollKey::from_code(KeyCode::Char('3')), None);
        assert_eq!(ScrollKey::from_code(KeyCode::Tab), None);
    }

    #[test]
    fn handled_from_bool() {
        assert_eq!(Handled::from(true), Handled::Yes);
        assert_eq!(Handled::from(false), Handled::No);
    }
}
