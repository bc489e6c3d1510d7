// Modal overlay rendering
//
// Modals are rendered on top of the main content:
// - Help modal: keyboard shortcuts and current theme

use crate::nav::SectionId;
use crate::tui::app::App;
use crate::tui::modal::Modal;
use ratatui::{
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Render the help modal overlay
fn render_help(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let key_style = theme.accent_style();
    let desc_style = theme.text_style();
    let header_style = theme.heading_style();

    // Helper to create a keybind line: "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let first = SectionId::ALL[0].shortcut();
    let last = SectionId::ALL[SectionId::ALL.len() - 1].shortcut();
    let sections = SectionId::ALL
        .iter()
        .map(|s| s.label())
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = vec![
        Line::raw(""),
        Line::from(Span::styled("  Sections", header_style)),
        kb(&format!("{first}-{last}"), "Jump to section"),
        Line::from(Span::styled(format!("    {sections}"), theme.muted_style())),
        kb("m", "Toggle menu (narrow terminals)"),
        Line::raw(""),
        Line::from(Span::styled("  Page", header_style)),
        kb("↑/↓, j/k", "Scroll"),
        kb("PgUp/PgDn", "Scroll a page (Space: down)"),
        kb("Home/End", "Jump to top/bottom (g/G)"),
        kb("Tab", "Next button or link"),
        kb("Shift+Tab", "Previous button or link"),
        kb("Enter", "Press button / copy link"),
        kb("Esc", "Clear focus / close menu"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("t", "Cycle theme"),
        kb("?", "Toggle this help"),
        kb("q", "Quit"),
    ];

    if app.config.features.mouse {
        lines.extend([
            Line::raw(""),
            Line::from(Span::styled("  Mouse", header_style)),
            kb("Click", "Select section / toggle menu"),
            kb("Wheel", "Scroll page"),
        ]);
    }

    lines.extend([
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            theme.border_style(),
        )),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(app.theme_kind.name(), key_style),
        ]),
    ]);

    let width = 48;
    let height = lines.len() as u16 + 2;
    let area = centered_rect(width, height, f.area());

    // Clear the area behind the modal
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(Text::from(lines))
        .style(theme.text_style().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.primary_style())
                .border_type(theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}
