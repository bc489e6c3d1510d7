// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, animation ticks)
// - Routing input into the navigation controller and page

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod modal;
pub mod page;
pub mod scroll;
pub mod theme;
pub mod traits;
pub mod views;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::nav::SectionId;
use anyhow::{Context, Result};
use app::App;
use components::MenuAction;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use traits::{Interactive, Scrollable};

/// How long one loop iteration waits for terminal input
const INPUT_POLL: Duration = Duration::from_millis(5);

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done, whether or not the loop failed. `start` names a section to
/// scroll to once the viewer is up.
pub async fn run_tui(config: Config, log_buffer: LogBuffer, start: Option<String>) -> Result<()> {
    let mouse = config.features.mouse;

    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    if mouse {
        execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::with_config(config, log_buffer);
    tracing::info!(theme = app.theme_kind.name(), "viewer started");
    if let Some(id) = start.as_deref() {
        app.select_by_id(id);
    }

    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)
            .context("Failed to disable mouse capture")?;
    }
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Two sources feed the loop:
/// 1. Animation ticks at the configured frame interval
/// 2. Keyboard, mouse and resize events from the terminal
///
/// The select is biased toward the tick so a held key cannot starve a
/// running scroll animation. The screen is only redrawn when something
/// changed.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(app.config.scroll.frame_interval());
    tick_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut dirty = true;

    loop {
        if dirty {
            terminal
                .draw(|f| views::draw(f, app))
                .context("Failed to draw terminal")?;
            dirty = false;
        }

        tokio::select! {
            biased;

            // Animation frame; toasts expire on redraw
            _ = tick_interval.tick() => {
                if app.tick() || app.toast.is_some() {
                    dirty = true;
                }
            }

            // Keyboard, mouse or resize
            changed = async {
                if event::poll(INPUT_POLL).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => {
                            handle_key_event(app, key_event);
                            true
                        }
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        Ok(Event::Resize(width, height)) => {
                            tracing::debug!(width, height, "terminal resized");
                            true
                        }
                        Ok(_) => false,
                        Err(e) => {
                            tracing::warn!(error = %e, "failed to read terminal event");
                            false
                        }
                    }
                } else {
                    false
                }
            } => {
                dirty |= changed;
            }
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!("viewer closed");
    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Global → Menu → Page actions → Page scrolling
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Release events keep the InputHandler in sync, whatever has focus
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return;
    }
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // Layer 1: Modal captures all input when active
    if handle_modal_input(app, &key_event) {
        return;
    }

    // Layer 2: Global keys
    if handle_global_keys(app, &key_event) {
        return;
    }

    let key = key_event.code;

    // Layer 3: Open dropdown menu
    if app.menu_visible() && handle_menu_input(app, key) {
        return;
    }

    // Layer 4: Page actions on the focused target
    match key {
        KeyCode::Enter => {
            if app.handle_key_press(key) {
                app.activate_focused();
            }
            return;
        }
        KeyCode::Char('y') => {
            if app.handle_key_press(key) {
                app.copy_focused_link();
            }
            return;
        }
        _ => {}
    }

    // Layer 5: Page scrolling and link focus, with hold-to-repeat
    if app.handle_key_press(key) {
        app.page.handle_key(key_event);
    }
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(ref mut modal) = app.modal else {
        return false;
    };

    match modal.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => app.modal = None,
    }

    true
}

/// Handle global keys - returns true if handled
/// Every global key is single-shot, so holding one fires it once
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    let key = key_event.code;

    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            true
        }
        KeyCode::Char('?') => {
            if app.handle_key_press(key) {
                app.modal = Some(Modal::help());
            }
            true
        }
        KeyCode::Char('t') => {
            if app.handle_key_press(key) {
                app.next_theme();
            }
            true
        }
        // Menu toggle only exists in the compact layout
        KeyCode::Char('m') => {
            if app.handle_key_press(key) && app.is_compact() {
                app.toggle_menu();
            }
            true
        }
        KeyCode::Char(c) => match SectionId::from_shortcut(c) {
            Some(section) => {
                if app.handle_key_press(key) {
                    app.select_section(section);
                }
                true
            }
            None => false,
        },
        _ => false,
    }
}

/// Handle input while the dropdown is open - returns true if handled
///
/// Keys the menu does not use fall through so the page still scrolls.
fn handle_menu_input(app: &mut App, key: KeyCode) -> bool {
    if !app.handle_key_press(key) {
        // Held key inside its debounce window; swallow it if the menu uses it
        return matches!(
            key,
            KeyCode::Up | KeyCode::Down | KeyCode::Char('j' | 'k') | KeyCode::Enter | KeyCode::Esc
        );
    }

    match app.menu.handle_input(key) {
        MenuAction::None => {
            // Let the page layer see this press
            app.handle_key_release(key);
            false
        }
        MenuAction::Moved => true,
        MenuAction::Select(section) => {
            app.select_section(section);
            true
        }
        MenuAction::Close => {
            app.toggle_menu();
            true
        }
    }
}

/// Handle mouse input - returns true if anything changed
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) -> bool {
    if !app.config.features.mouse || app.modal.is_some() {
        return false;
    }

    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => app.click(mouse_event.column, mouse_event.row),
        MouseEventKind::ScrollUp => {
            app.page.scroll_up();
            true
        }
        MouseEventKind::ScrollDown => {
            app.page.scroll_down();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::traits::ComponentId;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn app(width: u16) -> App {
        let mut app = App::with_config(Config::default(), LogBuffer::new());
        app.set_screen_width(width);
        app.layout_page(width - 1, 30);
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
        handle_key_event(
            app,
            KeyEvent {
                code,
                modifiers: KeyModifiers::NONE,
                kind: KeyEventKind::Release,
                state: KeyEventState::NONE,
            },
        );
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn digit_selects_section() {
        let mut app = app(120);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.nav.active(), SectionId::Skills);
    }

    #[test]
    fn menu_key_ignored_on_desktop() {
        let mut app = app(120);
        press(&mut app, KeyCode::Char('m'));
        assert!(!app.nav.menu_open());
    }

    #[test]
    fn compact_menu_round_trip() {
        let mut app = app(60);
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.focus(), ComponentId::MobileMenu);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert!(!app.nav.menu_open());
        assert_eq!(app.nav.active(), SectionId::Experience);
    }

    #[test]
    fn esc_closes_menu_without_selecting() {
        let mut app = app(60);
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Esc);
        assert!(!app.nav.menu_open());
        assert_eq!(app.nav.active(), SectionId::Home);
    }

    #[test]
    fn page_keys_fall_through_open_menu() {
        let mut app = app(60);
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::PageDown);
        assert!(app.nav.menu_open());
        assert!(app.page.scroll_offset() > 0);
    }

    #[test]
    fn help_modal_swallows_keys() {
        let mut app = app(120);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.modal.is_some());

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.nav.active(), SectionId::Home);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.modal.is_none());
    }

    #[test]
    fn quit_and_theme_keys() {
        let mut app = app(120);
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme_kind.name(), "Dark");

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn wheel_scroll_is_organic() {
        let mut app = app(120);
        assert!(handle_mouse_event(&mut app, mouse(MouseEventKind::ScrollDown, 5, 10)));
        assert_eq!(app.page.scroll_offset(), 1);
        assert_eq!(app.nav.active(), SectionId::Home);
    }

    #[test]
    fn mouse_ignored_when_disabled() {
        let mut app = app(120);
        app.config.features.mouse = false;
        assert!(!handle_mouse_event(&mut app, mouse(MouseEventKind::ScrollDown, 5, 10)));
        assert_eq!(app.page.scroll_offset(), 0);
    }
}
