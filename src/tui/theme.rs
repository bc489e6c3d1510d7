// Theme system for the TUI
//
// Provides color themes that can be switched at runtime with 't'.
// Page lines bake their styles in when built, so a theme switch rebuilds the
// document.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Rose,
    Dark,
    Light,
    Nord,
    Terminal,
}

impl ThemeKind {
    /// Get all available themes
    pub fn all() -> &'static [ThemeKind] {
        &[
            ThemeKind::Rose,
            ThemeKind::Dark,
            ThemeKind::Light,
            ThemeKind::Nord,
            ThemeKind::Terminal,
        ]
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Rose => "Rose",
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::Nord => "Nord",
            ThemeKind::Terminal => "Terminal",
        }
    }

    /// Look up a theme by display name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Rose => Theme::rose(),
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Nord => Theme::nord(),
            ThemeKind::Terminal => Theme::terminal(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub border_type: BorderType,

    // Brand colors
    pub primary: Color,
    pub accent: Color,
    pub heading: Color,
    pub link: Color,

    // Navigation
    pub nav_active_fg: Color,
    pub nav_active_bg: Color,

    // Focus (menu cursor, focused link)
    pub focus_fg: Color,
    pub focus_bg: Color,

    // Status line
    pub status_bar: Color,
    pub log_warn: Color,
    pub log_error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::rose()
    }
}

impl Theme {
    /// Warm rose palette (default)
    pub fn rose() -> Self {
        Self {
            background: Color::Rgb(30, 24, 28),
            foreground: Color::Rgb(240, 228, 232),
            muted: Color::Rgb(168, 150, 158),
            border: Color::Rgb(92, 72, 82),
            border_type: BorderType::Rounded,

            primary: Color::Rgb(219, 112, 147),  // Pale violet red
            accent: Color::Rgb(244, 164, 96),    // Sandy brown
            heading: Color::Rgb(255, 240, 245), // Lavender blush
            link: Color::Rgb(135, 206, 235),

            nav_active_fg: Color::Rgb(30, 24, 28),
            nav_active_bg: Color::Rgb(219, 112, 147),

            focus_fg: Color::Rgb(30, 24, 28),
            focus_bg: Color::Rgb(244, 164, 96),

            status_bar: Color::Rgb(168, 150, 158),
            log_warn: Color::Rgb(244, 164, 96),
            log_error: Color::Rgb(240, 80, 80),
        }
    }

    /// Dark theme
    pub fn dark() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            muted: Color::Gray,
            border: Color::DarkGray,
            border_type: BorderType::Plain,

            primary: Color::Cyan,
            accent: Color::Magenta,
            heading: Color::White,
            link: Color::LightBlue,

            nav_active_fg: Color::Black,
            nav_active_bg: Color::Cyan,

            focus_fg: Color::Black,
            focus_bg: Color::Yellow,

            status_bar: Color::Green,
            log_warn: Color::Yellow,
            log_error: Color::Red,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            muted: Color::DarkGray,
            border: Color::Gray,
            border_type: BorderType::Plain,

            primary: Color::Blue,
            accent: Color::Magenta,
            heading: Color::Black,
            link: Color::Blue,

            nav_active_fg: Color::White,
            nav_active_bg: Color::Blue,

            focus_fg: Color::Black,
            focus_bg: Color::LightYellow,

            status_bar: Color::DarkGray,
            log_warn: Color::Rgb(184, 134, 11), // Dark goldenrod
            log_error: Color::Red,
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            background: Color::Rgb(46, 52, 64),
            foreground: Color::Rgb(236, 239, 244),
            muted: Color::Rgb(129, 161, 193),
            border: Color::Rgb(76, 86, 106),
            border_type: BorderType::Rounded,

            primary: Color::Rgb(136, 192, 208), // Frost
            accent: Color::Rgb(180, 142, 173),  // Purple
            heading: Color::Rgb(236, 239, 244),
            link: Color::Rgb(143, 188, 187),

            nav_active_fg: Color::Rgb(46, 52, 64),
            nav_active_bg: Color::Rgb(136, 192, 208),

            focus_fg: Color::Rgb(46, 52, 64),
            focus_bg: Color::Rgb(235, 203, 139), // Yellow

            status_bar: Color::Rgb(163, 190, 140), // Green
            log_warn: Color::Rgb(235, 203, 139),
            log_error: Color::Rgb(191, 97, 106),
        }
    }

    /// Terminal's own ANSI palette, no RGB
    pub fn terminal() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::Reset,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            border_type: BorderType::Plain,

            primary: Color::Red,
            accent: Color::Yellow,
            heading: Color::Reset,
            link: Color::Blue,

            nav_active_fg: Color::Reset,
            nav_active_bg: Color::Red,

            focus_fg: Color::Reset,
            focus_bg: Color::Yellow,

            status_bar: Color::DarkGray,
            log_warn: Color::Yellow,
            log_error: Color::Red,
        }
    }

    // Helper methods for creating styles

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.heading)
            .add_modifier(Modifier::BOLD)
    }

    pub fn primary_style(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn link_style(&self) -> Style {
        Style::default()
            .fg(self.link)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Highlighted navigation entry
    pub fn nav_active_style(&self) -> Style {
        Style::default()
            .fg(self.nav_active_fg)
            .bg(self.nav_active_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Menu cursor and focused link
    pub fn focus_style(&self) -> Style {
        Style::default()
            .fg(self.focus_fg)
            .bg(self.focus_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_style(&self) -> Style {
        Style::default().fg(self.status_bar)
    }
}
