// Mobile dropdown menu
//
// Shown below the nav bar in the compact layout while the menu flag is set.
// Owns only a cursor; open/closed state belongs to the nav controller.
// Input handling returns a `MenuAction` for App to execute, the same way the
// help modal does.

use crate::nav::SectionId;
use crate::tui::traits::{Component, ComponentId, RenderContext};
use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Status bar hint while the menu has focus
pub const MENU_HINT: &str = "↑↓ move  Enter select  Esc close";

/// Actions returned by menu input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Key not used by the menu
    None,
    /// Cursor moved
    Moved,
    /// Select this section (closes the menu)
    Select(SectionId),
    /// Close without selecting
    Close,
}

#[derive(Debug, Clone, Default)]
pub struct MobileMenu {
    cursor: usize,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put the cursor on `section`; called each time the menu opens
    pub fn reset(&mut self, section: SectionId) {
        self.cursor = section.index();
    }

    pub fn cursor(&self) -> SectionId {
        SectionId::from_index(self.cursor).unwrap_or_default()
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&mut self, key: KeyCode) -> MenuAction {
        let count = SectionId::ALL.len();
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = (self.cursor + count - 1) % count;
                MenuAction::Moved
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = (self.cursor + 1) % count;
                MenuAction::Moved
            }
            KeyCode::Enter => MenuAction::Select(self.cursor()),
            KeyCode::Esc => MenuAction::Close,
            _ => MenuAction::None,
        }
    }
}

/// Dropdown area directly under the nav bar, clipped to the screen
pub fn area(nav: Rect, screen: Rect) -> Rect {
    let wanted = SectionId::ALL.len() as u16 + 2;
    let available = screen.bottom().saturating_sub(nav.bottom());
    Rect::new(nav.x, nav.bottom(), nav.width, wanted.min(available))
}

/// One clickable row per section inside the dropdown border
pub fn hitboxes(menu: Rect) -> Vec<(Rect, SectionId)> {
    let inner_width = menu.width.saturating_sub(2);
    SectionId::ALL
        .into_iter()
        .enumerate()
        .map(|(i, section)| (Rect::new(menu.x + 1, menu.y + 1 + i as u16, inner_width, 1), section))
        .filter(|(row, _)| row.bottom() < menu.bottom())
        .collect()
}

impl Component for MobileMenu {
    fn id(&self) -> ComponentId {
        ComponentId::MobileMenu
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let focused = ctx.is_focused(self.id());

        let lines: Vec<Line> = SectionId::ALL
            .into_iter()
            .map(|section| {
                let on_cursor = focused && section == self.cursor();
                let marker = if on_cursor { "▸ " } else { "  " };
                let style = if on_cursor {
                    theme.focus_style()
                } else if section == ctx.active {
                    theme.nav_active_style()
                } else {
                    theme.text_style()
                };
                Line::from(vec![
                    Span::styled(marker, theme.primary_style()),
                    Span::styled(format!("{} {}", section.shortcut(), section.label()), style),
                ])
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style())
            .style(theme.text_style().bg(theme.background));

        f.render_widget(Clear, area);
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_wraps_both_ways() {
        let mut menu = MobileMenu::new();
        assert_eq!(menu.cursor(), SectionId::Home);

        assert_eq!(menu.handle_input(KeyCode::Up), MenuAction::Moved);
        assert_eq!(menu.cursor(), SectionId::Contact);

        assert_eq!(menu.handle_input(KeyCode::Char('j')), MenuAction::Moved);
        assert_eq!(menu.cursor(), SectionId::Home);
    }

    #[test]
    fn enter_selects_cursor_and_esc_closes() {
        let mut menu = MobileMenu::new();
        menu.reset(SectionId::Skills);
        menu.handle_input(KeyCode::Down);
        assert_eq!(
            menu.handle_input(KeyCode::Enter),
            MenuAction::Select(SectionId::Gallery)
        );
        assert_eq!(menu.handle_input(KeyCode::Esc), MenuAction::Close);
        assert_eq!(menu.handle_input(KeyCode::Char('x')), MenuAction::None);
    }

    #[test]
    fn dropdown_sits_under_nav_bar() {
        let nav = Rect::new(0, 0, 50, 3);
        let screen = Rect::new(0, 0, 50, 30);
        let menu = area(nav, screen);
        assert_eq!(menu, Rect::new(0, 3, 50, 8));

        let rows = hitboxes(menu);
        assert_eq!(rows.len(), SectionId::ALL.len());
        assert_eq!(rows[0], (Rect::new(1, 4, 48, 1), SectionId::Home));
        assert_eq!(rows[5].1, SectionId::Contact);
    }

    #[test]
    fn short_screen_clips_rows() {
        let nav = Rect::new(0, 0, 50, 3);
        let screen = Rect::new(0, 0, 50, 8);
        let menu = area(nav, screen);
        assert_eq!(menu.height, 5);
        // Border top/bottom leaves three rows
        assert_eq!(hitboxes(menu).len(), 3);
    }
}
