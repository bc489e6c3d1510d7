// Status bar component
//
// Renders the bottom line: active section, the section at the top of the
// viewport, scroll position, a key hint, and the most recent log line.

use super::mobile_menu::MENU_HINT;
use crate::logging::LogLevel;
use crate::tui::app::App;
use crate::tui::traits::{ComponentId, Interactive};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const SEPARATOR: &str = " │ ";

/// Render the status bar
///
/// Compact layout drops the key hint to leave room for the log line.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let status = theme.status_style();

    let mut spans = vec![
        Span::styled(" ★ ", theme.primary_style()),
        Span::styled(app.nav.active().label(), theme.accent_style()),
    ];

    if let Some(anchor) = app.page.visible_anchor() {
        spans.push(Span::styled(SEPARATOR, status));
        spans.push(Span::styled(format!("⌖ {anchor}"), status));
    }

    let position = if app.page.is_animating() {
        format!("{:>3}% ↕", app.page.percent())
    } else {
        format!("{:>3}%", app.page.percent())
    };
    spans.push(Span::styled(SEPARATOR, status));
    spans.push(Span::styled(position, status));

    if !app.is_compact() {
        let hint = match app.focus() {
            ComponentId::MobileMenu => Some(MENU_HINT),
            ComponentId::Page => app.page.focus_hint(),
            _ => None,
        };
        if let Some(hint) = hint {
            spans.push(Span::styled(SEPARATOR, status));
            spans.push(Span::styled(hint, theme.muted_style()));
        }
    }

    if let Some(entry) = app.latest_log() {
        let level_color = match entry.level {
            LogLevel::Error => theme.log_error,
            LogLevel::Warn => theme.log_warn,
            _ => theme.status_bar,
        };
        spans.push(Span::styled(SEPARATOR, status));
        spans.push(Span::styled(
            format!("{} ", entry.timestamp.format("%H:%M:%S")),
            theme.muted_style(),
        ));
        spans.push(Span::styled(
            format!("{} ", entry.level.as_str()),
            Style::default().fg(level_color),
        ));
        spans.push(Span::styled(entry.message, theme.muted_style()));
    }

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(theme.border_style()),
    );

    f.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::logging::{LogBuffer, LogEntry};
    use crate::nav::SectionId;
    use ratatui::{backend::TestBackend, Terminal};

    fn row(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn shows_active_section_and_latest_log() {
        let log_buffer = LogBuffer::new();
        log_buffer.add(LogEntry {
            timestamp: chrono::Utc::now(),
            level: LogLevel::Warn,
            message: "ignoring selection".into(),
        });
        let mut app = App::with_config(Config::default(), log_buffer);
        app.set_screen_width(160);
        app.layout_page(159, 30);
        app.select_section(SectionId::Skills);

        let mut terminal = Terminal::new(TestBackend::new(160, 2)).unwrap();
        terminal.draw(|f| render(f, f.area(), &app)).unwrap();

        let line = row(&terminal, 1);
        assert!(line.contains("Skills"), "{line}");
        assert!(line.contains("WARN ignoring selection"), "{line}");
    }
}
