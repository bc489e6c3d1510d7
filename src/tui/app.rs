// TUI application state
//
// App is the orchestrator: it owns the navigation controller, the page view
// (the controller's scroll environment), the dropdown menu cursor, theme,
// modal and toast. Key and mouse handlers in `tui/mod.rs` call into the
// methods here; rendering reads from it in `views`.

use super::clipboard::copy_to_clipboard;
use super::components::{nav_bar, MobileMenu, NavLayout, PageView, Toast};
use super::input::InputHandler;
use super::layout::Breakpoint;
use super::modal::Modal;
use super::page::{PageOptions, TargetAction};
use super::theme::{Theme, ThemeKind};
use super::traits::{ComponentId, CopyResult, Copyable};
use crate::config::Config;
use crate::content::{Portfolio, PORTFOLIO};
use crate::logging::{LogBuffer, LogEntry};
use crate::nav::{NavController, SectionId};
use crossterm::event::KeyCode;
use ratatui::layout::{Position, Rect};

/// Clickable regions recorded by the last draw
#[derive(Debug, Clone, Default)]
pub struct Hitboxes {
    pub nav: NavLayout,
    /// Dropdown rows, present only while the menu is drawn
    pub menu: Vec<(Rect, SectionId)>,
}

/// What a left click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Toggle,
    Section(SectionId),
}

impl Hitboxes {
    pub fn hit(&self, column: u16, row: u16) -> Option<ClickTarget> {
        let point = Position::new(column, row);

        if self.nav.toggle.is_some_and(|rect| rect.contains(point)) {
            return Some(ClickTarget::Toggle);
        }

        self.menu
            .iter()
            .chain(self.nav.entries.iter())
            .find(|(rect, _)| rect.contains(point))
            .map(|(_, section)| ClickTarget::Section(*section))
    }
}

/// Main application state for the TUI
pub struct App {
    /// Menu flag and active section
    pub nav: NavController,

    /// Scrolling document; the controller's scroll environment
    pub page: PageView,

    /// Dropdown menu cursor
    pub menu: MobileMenu,

    /// Current color theme
    pub theme_kind: ThemeKind,
    pub theme: Theme,

    pub config: Config,

    /// Log buffer for the status bar's latest-line display
    pub log_buffer: LogBuffer,

    /// Active modal overlay (help)
    pub modal: Option<Modal>,

    /// Active toast notification (auto-dismisses)
    pub toast: Option<Toast>,

    /// Mouse hit regions from the last frame
    pub hitboxes: Hitboxes,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Breakpoint from the last frame
    compact: bool,

    /// Input handler for flexible key behavior
    input_handler: InputHandler,
}

impl App {
    /// Create app state from resolved config
    pub fn with_config(config: Config, log_buffer: LogBuffer) -> Self {
        Self::with_content(&PORTFOLIO, config, log_buffer)
    }

    pub fn with_content(content: &'static Portfolio, config: Config, log_buffer: LogBuffer) -> Self {
        let theme_kind = ThemeKind::from_name(&config.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %config.theme, "unknown theme, using default");
            ThemeKind::default()
        });
        let theme = theme_kind.theme();

        // Real width arrives with the first frame
        let options = PageOptions {
            width: config.compact_width,
            footer: config.features.footer,
        };
        let page = PageView::new(content, &theme, options, config.scroll.smooth);

        Self {
            nav: NavController::new(),
            page,
            menu: MobileMenu::new(),
            theme_kind,
            theme,
            config,
            log_buffer,
            modal: None,
            toast: None,
            hitboxes: Hitboxes::default(),
            should_quit: false,
            compact: false,
            input_handler: InputHandler::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Layout
    // ─────────────────────────────────────────────────────────────

    /// Record the terminal width for this frame
    ///
    /// Compact below the configured breakpoint, or whenever the desktop bar
    /// cannot show every section.
    pub fn set_screen_width(&mut self, width: u16) {
        let compact = Breakpoint::from_width(width, self.config.compact_width).is_compact()
            || width < nav_bar::desktop_width(self.page_monogram());
        if compact != self.compact {
            tracing::debug!(width, compact, "layout breakpoint changed");
            self.compact = compact;
        }
    }

    pub fn page_monogram(&self) -> &'static str {
        self.page.content().profile.monogram
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }

    /// The dropdown is only drawn in the compact layout
    pub fn menu_visible(&self) -> bool {
        self.compact && self.nav.menu_open()
    }

    /// Component that receives keyboard input
    pub fn focus(&self) -> ComponentId {
        if self.modal.is_some() {
            ComponentId::Help
        } else if self.menu_visible() {
            ComponentId::MobileMenu
        } else {
            ComponentId::Page
        }
    }

    /// Lay the page out for the area it will be drawn in
    pub fn layout_page(&mut self, width: u16, height: u16) {
        let options = PageOptions {
            width,
            footer: self.config.features.footer,
        };
        self.page.relayout(options, &self.theme);
        self.page.sync_viewport(height as usize);
    }

    // ─────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────

    pub fn toggle_menu(&mut self) {
        if self.nav.toggle_menu() {
            self.menu.reset(self.nav.active());
        }
    }

    pub fn select_section(&mut self, section: SectionId) {
        let outcome = self.nav.select(section, &mut self.page);
        tracing::info!(%section, ?outcome, "section selected");
    }

    /// Select by anchor id; false (and nothing changes) if the id is unknown
    pub fn select_by_id(&mut self, id: &str) -> bool {
        match self.nav.select_by_id(id, &mut self.page) {
            Some(outcome) => {
                tracing::info!(id, ?outcome, "section selected");
                true
            }
            None => false,
        }
    }

    /// Handle a left click at a terminal cell; returns whether it hit anything
    pub fn click(&mut self, column: u16, row: u16) -> bool {
        if self.modal.is_some() {
            return false;
        }
        match self.hitboxes.hit(column, row) {
            Some(ClickTarget::Toggle) => {
                self.toggle_menu();
                true
            }
            Some(ClickTarget::Section(section)) => {
                self.select_section(section);
                true
            }
            None => false,
        }
    }

    /// Activate the focused page element; false if nothing is focused
    pub fn activate_focused(&mut self) -> bool {
        let Some(action) = self.page.focused_target().map(|t| t.action.clone()) else {
            return false;
        };
        match action {
            TargetAction::Jump(section) => self.select_section(section),
            TargetAction::Link(_) => self.copy_focused_link(),
        }
        true
    }

    /// Hand the focused link's URI to the system clipboard
    pub fn copy_focused_link(&mut self) {
        let result = match self.page.copy_text() {
            None => CopyResult::Empty,
            Some(uri) => match copy_to_clipboard(&uri) {
                Ok(()) => {
                    tracing::info!(%uri, "link copied");
                    CopyResult::success(self.page.copy_description())
                }
                Err(e) => {
                    tracing::warn!(%uri, error = %e, "clipboard copy failed");
                    CopyResult::error("Clipboard unavailable")
                }
            },
        };
        self.show_toast(result.toast_message());
    }

    // ─────────────────────────────────────────────────────────────
    // Theme, toast, animation
    // ─────────────────────────────────────────────────────────────

    /// Cycle to the next theme
    pub fn next_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
        self.page.restyle(&self.theme);
        self.show_toast(format!("Theme: {}", self.theme_kind.name()));
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Clear the toast if it has expired
    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    /// Advance the scroll animation; true if the page moved
    pub fn tick(&mut self) -> bool {
        self.page.tick()
    }

    pub fn latest_log(&self) -> Option<LogEntry> {
        self.log_buffer.latest()
    }

    // ─────────────────────────────────────────────────────────────
    // Key debounce
    // ─────────────────────────────────────────────────────────────

    /// Handle key press with debounce/repeat logic
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    /// Handle key release
    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }
}
