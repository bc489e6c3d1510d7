//! Page view component
//!
//! Owns the laid-out [`Document`], the viewport [`ScrollState`] and the
//! keyboard focus among activatable elements. It is the
//! [`ScrollEnvironment`] the navigation controller scrolls: `locate` reads
//! the document's anchor table and `scroll_into_view` hands the offset to the
//! scroll animator.

use super::scrollbar::render_scrollbar;
use crate::content::Portfolio;
use crate::nav::ScrollEnvironment;
use crate::tui::page::{Anchor, Document, PageOptions, Target, TargetAction};
use crate::tui::scroll::ScrollState;
use crate::tui::theme::Theme;
use crate::tui::traits::{
    Component, ComponentId, Copyable, Handled, Interactive, RenderContext, Scrollable,
    ScrollableInteractive,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::Paragraph,
    Frame,
};

pub struct PageView {
    content: &'static Portfolio,
    document: Document,
    scroll: ScrollState,
    /// Index into `document.targets()`
    focused: Option<usize>,
}

impl PageView {
    pub fn new(content: &'static Portfolio, theme: &Theme, options: PageOptions, smooth: bool) -> Self {
        Self {
            content,
            document: Document::build(content, theme, options),
            scroll: ScrollState::new(smooth),
            focused: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn content(&self) -> &'static Portfolio {
        self.content
    }

    // ─────────────────────────────────────────────────────────────
    // Layout
    // ─────────────────────────────────────────────────────────────

    /// Rebuild for new options (width, footer); no-op if unchanged
    pub fn relayout(&mut self, options: PageOptions, theme: &Theme) {
        if options != self.document.options() {
            self.rebuild(options, theme);
        }
    }

    /// Rebuild with the current options after a theme change
    ///
    /// Same options give the same lines, anchors and targets, so offset,
    /// animation target and focus all stay as they are.
    pub fn restyle(&mut self, theme: &Theme) {
        self.document = Document::build(self.content, theme, self.document.options());
    }

    /// Re-wrapping moves every line, so position is carried over by anchor:
    /// the viewport returns to the start of the section it was showing, and
    /// an animation headed for an anchor keeps heading for it.
    fn rebuild(&mut self, options: PageOptions, theme: &Theme) {
        let top = self.document.anchor_at(self.scroll.offset());
        let pending = self
            .scroll
            .target()
            .and_then(|line| self.anchor_starting_at(line));

        self.document = Document::build(self.content, theme, options);

        self.scroll
            .update_dimensions(self.document.len(), self.scroll.viewport());
        let offset = top
            .and_then(|anchor| self.document.anchor(anchor.name))
            .unwrap_or(0);
        self.scroll.set_offset(offset);
        self.scroll
            .retarget(pending.and_then(|anchor| self.document.anchor(anchor.name)));

        if self
            .focused
            .is_some_and(|i| i >= self.document.targets().len())
        {
            self.focused = None;
        }
    }

    fn anchor_starting_at(&self, line: usize) -> Option<Anchor> {
        self.document
            .anchors()
            .iter()
            .find(|anchor| anchor.line == line)
            .copied()
    }

    /// Call each frame with the page area height
    pub fn sync_viewport(&mut self, height: usize) {
        self.scroll.update_dimensions(self.document.len(), height);
    }

    // ─────────────────────────────────────────────────────────────
    // Animation and position
    // ─────────────────────────────────────────────────────────────

    /// Advance the scroll animation one frame
    pub fn tick(&mut self) -> bool {
        self.scroll.tick()
    }

    pub fn is_animating(&self) -> bool {
        self.scroll.is_animating()
    }

    pub fn percent(&self) -> u16 {
        self.scroll.percent()
    }

    /// Anchor of the section at the top of the viewport
    pub fn visible_anchor(&self) -> Option<&'static str> {
        self.document
            .anchor_at(self.scroll.offset())
            .map(|anchor| anchor.name)
    }

    // ─────────────────────────────────────────────────────────────
    // Focus among activatable elements
    // ─────────────────────────────────────────────────────────────

    pub fn focused_target(&self) -> Option<&Target> {
        self.focused.and_then(|i| self.document.targets().get(i))
    }

    /// Focus the next element; starts from the first one on screen
    pub fn focus_next(&mut self) {
        let targets = self.document.targets();
        if targets.is_empty() {
            return;
        }
        let next = match self.focused {
            Some(i) => (i + 1) % targets.len(),
            None => targets
                .iter()
                .position(|t| t.line >= self.scroll.offset())
                .unwrap_or(0),
        };
        self.focus(next);
    }

    /// Focus the previous element; starts from the last one on screen
    pub fn focus_prev(&mut self) {
        let targets = self.document.targets();
        if targets.is_empty() {
            return;
        }
        let prev = match self.focused {
            Some(i) => (i + targets.len() - 1) % targets.len(),
            None => {
                let (_, end) = self.scroll.visible_range();
                targets
                    .iter()
                    .rposition(|t| t.line < end)
                    .unwrap_or(targets.len() - 1)
            }
        };
        self.focus(prev);
    }

    fn focus(&mut self, index: usize) {
        self.focused = Some(index);
        if let Some(target) = self.document.targets().get(index) {
            let line = target.line;
            self.scroll.ensure_visible(line);
        }
    }

    /// Drop focus; returns whether anything was focused
    pub fn clear_focus(&mut self) -> bool {
        self.focused.take().is_some()
    }
}

impl ScrollEnvironment for PageView {
    fn locate(&self, anchor: &str) -> Option<usize> {
        self.document.anchor(anchor)
    }

    fn scroll_into_view(&mut self, offset: usize) {
        self.scroll.request(offset);
    }
}

impl Component for PageView {
    fn id(&self) -> ComponentId {
        ComponentId::Page
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let (start, end) = self.scroll.visible_range();
        let focus_line = self
            .focused_target()
            .filter(|_| ctx.is_focused(self.id()))
            .map(|t| t.line);

        let lines: Vec<Line> = self.document.lines()[start.min(end)..end]
            .iter()
            .enumerate()
            .map(|(i, line)| {
                if Some(start + i) == focus_line {
                    line.clone().patch_style(theme.focus_style())
                } else {
                    line.clone()
                }
            })
            .collect();

        // Rightmost column is reserved for the scrollbar
        let text_area = Rect {
            width: area.width.saturating_sub(1),
            ..area
        };
        f.render_widget(
            Paragraph::new(lines).style(theme.text_style().bg(theme.background)),
            text_area,
        );
        render_scrollbar(f, area, &self.scroll, theme);
    }
}

impl Scrollable for PageView {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Interactive for PageView {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Tab => {
                self.focus_next();
                Handled::Yes
            }
            KeyCode::BackTab => {
                self.focus_prev();
                Handled::Yes
            }
            KeyCode::Esc => self.clear_focus().into(),
            _ => self.handle_scroll_keys(key),
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓ scroll  Tab links  Enter copy/jump  1-6 jump  ? help")
    }
}

impl Copyable for PageView {
    /// URI of the focused link; jump buttons have nothing to copy
    fn copy_text(&self) -> Option<String> {
        match &self.focused_target()?.action {
            TargetAction::Link(uri) => Some(uri.clone()),
            TargetAction::Jump(_) => None,
        }
    }

    fn copy_description(&self) -> String {
        match self.focused_target() {
            Some(target) => format!("{} to clipboard", target.label),
            None => "nothing".to_string(),
        }
    }
}
