/// Responsive breakpoint for layout decisions.
///
/// The threshold comes from config (`compact_width`), so every width check
/// goes through `Breakpoint::from_width` instead of comparing columns inline.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// Below the threshold: toggle button + dropdown menu
    Compact,
    /// Full navigation bar
    Desktop,
}

impl Breakpoint {
    pub fn from_width(width: u16, compact_width: u16) -> Self {
        if width < compact_width {
            Breakpoint::Compact
        } else {
            Breakpoint::Desktop
        }
    }

    pub fn is_compact(&self) -> bool {
        *self == Breakpoint::Compact
    }
}
