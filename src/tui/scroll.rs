// Scroll state for the page viewport
//
// Owns position, content size and viewport size, plus the in-flight
// scroll-into-view animation. Requests are fire-and-forget: a new request
// replaces the current target, and any organic scroll cancels it.

/// Fraction of the remaining distance covered per animation frame
const EASE_DIVISOR: usize = 4;

/// Scroll state for a single viewport
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Current scroll offset (line index at top of viewport)
    offset: usize,

    /// Total number of lines in content
    total: usize,

    /// Number of lines visible in viewport
    viewport: usize,

    /// Offset the animation is heading toward
    target: Option<usize>,

    /// Animate requests (true) or jump (false)
    smooth: bool,
}

impl ScrollState {
    pub fn new(smooth: bool) -> Self {
        Self {
            offset: 0,
            total: 0,
            viewport: 0,
            target: None,
            smooth,
        }
    }

    /// Update content and viewport dimensions
    /// Call this each render frame with current sizes
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;
        self.offset = self.offset.min(self.max_offset());
    }

    // ─────────────────────────────────────────────────────────────
    // Organic scrolling - always cancels an in-flight animation
    // ─────────────────────────────────────────────────────────────

    pub fn scroll_up(&mut self) {
        self.target = None;
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.target = None;
        if self.offset < self.max_offset() {
            self.offset += 1;
        }
    }

    pub fn page_up(&mut self) {
        self.target = None;
        let page = self.viewport.max(1);
        self.offset = self.offset.saturating_sub(page);
    }

    pub fn page_down(&mut self) {
        self.target = None;
        let page = self.viewport.max(1);
        self.offset = (self.offset + page).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.target = None;
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.target = None;
        self.offset = self.max_offset();
    }

    /// Scroll the minimum amount that makes `line` visible
    pub fn ensure_visible(&mut self, line: usize) {
        self.target = None;
        if line < self.offset {
            self.offset = line;
        } else if self.viewport > 0 && line >= self.offset + self.viewport {
            self.offset = self.clamp(line + 1 - self.viewport);
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Scroll-into-view
    // ─────────────────────────────────────────────────────────────

    /// Bring `offset` to the top of the viewport (as far as content allows)
    pub fn request(&mut self, offset: usize) {
        if self.smooth {
            self.target = Some(offset);
        } else {
            self.target = None;
            self.offset = self.clamp(offset);
        }
    }

    /// Advance the animation one frame; returns true if the offset moved
    pub fn tick(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };

        // Dimensions unknown until the first render
        if self.total == 0 {
            return false;
        }

        let target = self.clamp(target);
        if self.offset == target {
            self.target = None;
            return false;
        }

        let distance = self.offset.abs_diff(target);
        let step = (distance / EASE_DIVISOR).max(1);
        if self.offset < target {
            self.offset += step;
        } else {
            self.offset -= step;
        }

        if self.offset == target {
            self.target = None;
        }
        true
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<usize> {
        self.target
    }

    /// Replace the pending target without touching the current offset
    pub fn retarget(&mut self, target: Option<usize>) {
        self.target = target;
    }

    /// Move the offset directly (used after a relayout)
    pub fn set_offset(&mut self, offset: usize) {
        self.offset = self.clamp(offset);
    }

    // ─────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Get visible range (start_index, end_index)
    pub fn visible_range(&self) -> (usize, usize) {
        let start = self.offset;
        let end = (self.offset + self.viewport).min(self.total);
        (start, end)
    }

    /// Check if content overflows viewport (scrollbar needed)
    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.viewport
    }

    /// How far down the page the viewport is, 0..=100
    pub fn percent(&self) -> u16 {
        let max = self.max_offset();
        if max == 0 {
            100
        } else {
            ((self.offset.min(max) * 100) / max) as u16
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }

    /// Maximum valid offset
    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }

    /// Clamp to the valid range once dimensions are known
    fn clamp(&self, offset: usize) -> usize {
        if self.total == 0 {
            offset
        } else {
            offset.min(self.max_offset())
        }
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(true)
    }
}
