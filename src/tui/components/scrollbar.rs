//! Scrollbar rendering helper
//!
//! Draws the page scrollbar from a `ScrollState`.

use crate::tui::scroll::ScrollState;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Render a thumb-only scrollbar on the right edge of `area`
///
/// Nothing is drawn while the whole document fits.
pub fn render_scrollbar(f: &mut Frame, area: Rect, scroll: &ScrollState, theme: &Theme) {
    if !scroll.needs_scrollbar() {
        return;
    }

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(Style::default().fg(theme.primary))
        .track_style(Style::default().fg(theme.border));

    // Positions run over the scrollable range, not the whole document
    let range = scroll.total().saturating_sub(scroll.viewport());
    let mut scrollbar_state = ScrollbarState::new(range).position(scroll.offset());

    f.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
}
