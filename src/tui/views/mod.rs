// Views module - screen-level rendering logic
//
// One screen: nav bar, page, status bar, with the dropdown menu, help modal
// and toast layered on top. Drawing also records mouse hitboxes in App so
// clicks are tested against exactly what was painted.

mod modal;

use super::app::{App, Hitboxes};
use super::components::{mobile_menu, nav_bar, status_bar, NavBar};
use super::traits::{Component, RenderContext};
use crate::nav::NavEntry;
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::Block;
use ratatui::Frame;

/// Rows for the status bar (top border plus one line)
const STATUS_HEIGHT: u16 = 2;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let screen = f.area();
    app.set_screen_width(screen.width);

    let bg_block = Block::default().style(app.theme.text_style().bg(app.theme.background));
    f.render_widget(bg_block, screen);

    let [nav_area, page_area, status_area] = Layout::vertical([
        Constraint::Length(nav_bar::NAV_BAR_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .areas(screen);

    // Page width excludes the scrollbar column
    app.layout_page(page_area.width.saturating_sub(1), page_area.height);

    let monogram = app.page_monogram();
    let nav_layout = nav_bar::layout(nav_area, app.is_compact(), monogram);
    let ctx = RenderContext::new(&app.theme, app.focus(), app.nav.active());
    let entries: Vec<NavEntry> = app.nav.entries().collect();

    NavBar {
        layout: &nav_layout,
        monogram,
        entries: &entries,
        menu_open: app.menu_visible(),
    }
    .render(f, nav_area, &ctx);
    app.page.render(f, page_area, &ctx);
    status_bar::render(f, status_area, app);

    let mut hitboxes = Hitboxes {
        nav: nav_layout,
        menu: Vec::new(),
    };

    if app.menu_visible() {
        let menu_area = mobile_menu::area(nav_area, screen);
        app.menu.render(f, menu_area, &ctx);
        hitboxes.menu = mobile_menu::hitboxes(menu_area);
    }

    // Modal overlay (on top of everything but the toast)
    if let Some(modal_state) = &app.modal {
        modal::render(f, modal_state, app);
    }

    if let Some(toast) = &app.toast {
        toast.render(f, screen, &app.theme);
    }

    if !app.config.features.mouse {
        hitboxes = Hitboxes::default();
    }
    app.hitboxes = hitboxes;

    // Clear expired toast after render
    app.clear_expired_toast();
}
