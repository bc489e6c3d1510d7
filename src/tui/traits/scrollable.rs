//! Organic scrolling for components that own a `ScrollState`

use super::Component;
use crate::tui::scroll::ScrollState;

/// A component with more lines than its viewport
///
/// Every movement here is user-driven and cancels a scroll-into-view
/// animation that is still running.
pub trait Scrollable: Component {
    fn scroll_state(&self) -> &ScrollState;

    fn scroll_state_mut(&mut self) -> &mut ScrollState;

    fn scroll_up(&mut self) {
        self.scroll_state_mut().scroll_up();
    }

    fn scroll_down(&mut self) {
        self.scroll_state_mut().scroll_down();
    }

    fn page_up(&mut self) {
        self.scroll_state_mut().page_up();
    }

    fn page_down(&mut self) {
        self.scroll_state_mut().page_down();
    }

    fn scroll_to_top(&mut self) {
        self.scroll_state_mut().scroll_to_top();
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_state_mut().scroll_to_bottom();
    }

    /// First line of the viewport
    fn scroll_offset(&self) -> usize {
        self.scroll_state().offset()
    }
}
