// Navigation bar component
//
// Desktop layout: monogram on the left, then one entry per section with the
// active entry highlighted. Compact layout: monogram, the active section's
// label, and a toggle button at the right edge that opens the dropdown menu.
//
// Geometry lives in `layout()` so mouse hit-testing and drawing agree.

use crate::nav::{NavEntry, SectionId};
use crate::tui::page::display_width;
use crate::tui::traits::{Component, ComponentId, RenderContext};
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by the bar (content row plus borders)
pub const NAV_BAR_HEIGHT: u16 = 3;

const TOGGLE_CLOSED: &str = " ☰ ";
const TOGGLE_OPEN: &str = " ✕ ";
const TOGGLE_WIDTH: u16 = 3;
const ENTRY_GAP: u16 = 1;
/// Left inset of the monogram, border included
const INSET: u16 = 2;

/// Clickable regions of the bar for one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavLayout {
    pub monogram: Rect,
    /// Desktop entries; empty in the compact layout
    pub entries: Vec<(Rect, SectionId)>,
    /// Compact toggle button; `None` on desktop
    pub toggle: Option<Rect>,
}

fn monogram_width(monogram: &str) -> u16 {
    display_width(monogram) as u16 + 2
}

fn entry_width(section: SectionId) -> u16 {
    display_width(section.label()) as u16 + 2
}

/// Columns the desktop bar needs to show every entry
pub fn desktop_width(monogram: &str) -> u16 {
    let entries: u16 = SectionId::ALL.into_iter().map(entry_width).sum();
    let gaps = ENTRY_GAP * (SectionId::ALL.len() as u16 - 1);
    // Inset, monogram, inset, entries, right border
    INSET + monogram_width(monogram) + INSET + entries + gaps + 1
}

/// Compute the bar geometry for `area`
///
/// Falls back to the compact layout when the desktop entries do not fit.
pub fn layout(area: Rect, compact: bool, monogram: &str) -> NavLayout {
    if area.height < NAV_BAR_HEIGHT || area.width <= INSET * 2 {
        return NavLayout::default();
    }

    let row = area.y + 1;
    let right = area.right().saturating_sub(1);
    let monogram_rect =
        Rect::new(area.x + INSET, row, monogram_width(monogram), 1).intersection(area);

    if compact || area.width < desktop_width(monogram) {
        let x = right.saturating_sub(TOGGLE_WIDTH + 1).max(area.x + 1);
        return NavLayout {
            monogram: monogram_rect,
            entries: Vec::new(),
            toggle: Some(Rect::new(x, row, TOGGLE_WIDTH, 1)),
        };
    }

    let mut entries = Vec::with_capacity(SectionId::ALL.len());
    let mut x = monogram_rect.right() + INSET;
    for section in SectionId::ALL {
        let width = entry_width(section);
        entries.push((Rect::new(x, row, width, 1), section));
        x += width + ENTRY_GAP;
    }

    NavLayout {
        monogram: monogram_rect,
        entries,
        toggle: None,
    }
}

/// Renderable view of the bar for one frame
pub struct NavBar<'a> {
    pub layout: &'a NavLayout,
    pub monogram: &'a str,
    /// Navigation list with the active flag, from the controller
    pub entries: &'a [NavEntry],
    pub menu_open: bool,
}

impl NavBar<'_> {
    fn is_active(&self, section: SectionId) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.section == section && entry.active)
    }
}

impl Component for NavBar<'_> {
    fn id(&self) -> ComponentId {
        ComponentId::NavBar
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style());
        f.render_widget(block, area);

        f.render_widget(
            Paragraph::new(Span::styled(
                format!(" {} ", self.monogram),
                theme.nav_active_style(),
            )),
            self.layout.monogram,
        );

        for (rect, section) in &self.layout.entries {
            let style = if self.is_active(*section) {
                theme.nav_active_style()
            } else {
                theme.text_style()
            };
            f.render_widget(
                Paragraph::new(Span::styled(format!(" {} ", section.label()), style)),
                *rect,
            );
        }

        if let Some(toggle) = self.layout.toggle {
            // Active section label between monogram and toggle
            let label_x = self.layout.monogram.right() + INSET;
            if label_x < toggle.x {
                let label_area = Rect::new(label_x, toggle.y, toggle.x - label_x, 1);
                f.render_widget(
                    Paragraph::new(Span::styled(ctx.active.label(), theme.muted_style())),
                    label_area,
                );
            }

            let (symbol, style) = if self.menu_open {
                (TOGGLE_OPEN, theme.focus_style())
            } else {
                (TOGGLE_CLOSED, theme.primary_style())
            };
            f.render_widget(Paragraph::new(Span::styled(symbol, style)), toggle);
        }
    }
}
