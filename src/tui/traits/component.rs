//! Core component trait - the foundation of the UI system
//!
//! Every UI element that can be rendered implements `Component`.
//! This trait provides identity and rendering capability.

use crate::nav::SectionId;
use crate::tui::theme::Theme;
use ratatui::{layout::Rect, Frame};

/// Unique identifier for a component
///
/// Used for focus tracking: exactly one of `MobileMenu`, `Page` or `Help`
/// receives input at a time. The nav bar is never focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    /// Desktop navigation bar / compact toggle row (non-focusable)
    NavBar,
    /// Compact-layout dropdown menu
    MobileMenu,
    /// Scrolling portfolio page
    Page,
    /// Help overlay
    Help,
}

/// Immutable context passed to components during rendering
///
/// Components only see what they need - no access to mutable app state.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// Color theme for styling
    pub theme: &'a Theme,

    /// Which component currently has focus
    pub focus: ComponentId,

    /// Section highlighted in navigation
    pub active: SectionId,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, focus: ComponentId, active: SectionId) -> Self {
        Self {
            theme,
            focus,
            active,
        }
    }

    /// Check if a component is currently focused
    pub fn is_focused(&self, id: ComponentId) -> bool {
        self.focus == id
    }
}

/// Base trait for all UI components
///
/// A component is anything that can render itself to the terminal.
/// This is the minimum contract - most components will also implement
/// additional traits like `Scrollable` or `Interactive`.
pub trait Component {
    /// Unique identifier for this component
    fn id(&self) -> ComponentId;

    /// Render the component to the given area
    ///
    /// # Arguments
    ///
    /// * `f` - The frame to render to
    /// * `area` - The rectangular area allocated for this component
    /// * `ctx` - Immutable render context (theme, focus, active section)
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}

