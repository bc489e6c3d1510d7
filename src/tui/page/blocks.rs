// Per-category mapping from content records to page blocks
//
// Every function is pure: same content, theme and width give the same lines.
// `width` is the text width inside the page padding.

use super::wrap::{display_width, wrap};
use super::{PageBlock, TargetAction, PAGE_PADDING};
use crate::content::{
    About, Certification, Contact, ExperienceEntry, Footer, GalleryItem, Portfolio, Profile,
    SkillCategory,
};
use crate::nav::SectionId;
use crate::tui::theme::Theme;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

const BUTTON_MARKER: &str = "▶ ";
const LINK_MARKER: &str = "↗ ";
const IMAGE_MARKER: &str = "▣ ";
const CERT_MARKER: &str = "🏆 ";

// ─────────────────────────────────────────────────────────────────────────────
// Line helpers
// ─────────────────────────────────────────────────────────────────────────────

fn pad(columns: usize) -> Span<'static> {
    Span::raw(" ".repeat(columns))
}

/// Left-aligned line inside the page padding
fn line(spans: Vec<Span<'static>>) -> Line<'static> {
    let mut all = Vec::with_capacity(spans.len() + 1);
    all.push(pad(PAGE_PADDING));
    all.extend(spans);
    Line::from(all)
}

/// Centered line; padding is baked in so plain-text output matches
fn centered(spans: Vec<Span<'static>>, width: usize) -> Line<'static> {
    let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    let offset = width.saturating_sub(used) / 2;
    let mut all = Vec::with_capacity(spans.len() + 1);
    all.push(pad(PAGE_PADDING + offset));
    all.extend(spans);
    Line::from(all)
}

fn paragraph(block: &mut PageBlock, text: &str, style: Style, width: usize, indent: usize) {
    for row in wrap(text, width.saturating_sub(indent)) {
        block.push(line(vec![pad(indent), Span::styled(row, style)]));
    }
}

fn centered_paragraph(block: &mut PageBlock, text: &str, style: Style, width: usize) {
    for row in wrap(text, width) {
        block.push(centered(vec![Span::styled(row, style)], width));
    }
}

/// Centered title with an underline rule
fn heading(block: &mut PageBlock, title: &str, theme: &Theme, width: usize) {
    let rows = wrap(title, width);
    let rule_width = rows
        .iter()
        .map(|r| display_width(r))
        .max()
        .unwrap_or(0)
        .min(width);

    for row in rows {
        block.push(centered(vec![Span::styled(row, theme.heading_style())], width));
    }
    block.push(centered(
        vec![Span::styled("─".repeat(rule_width), theme.primary_style())],
        width,
    ));
    block.blank();
}

/// Wrapped text with a marker on the first row and matching indent after
fn marked(
    block: &mut PageBlock,
    indent: usize,
    marker: &str,
    text: &str,
    marker_style: Style,
    style: Style,
    width: usize,
) {
    let marker_width = display_width(marker);
    let rows = wrap(text, width.saturating_sub(indent + marker_width));
    for (i, row) in rows.into_iter().enumerate() {
        let lead = if i == 0 {
            Span::styled(marker.to_string(), marker_style)
        } else {
            pad(marker_width)
        };
        block.push(line(vec![pad(indent), lead, Span::styled(row, style)]));
    }
}

fn button(block: &mut PageBlock, label: &str, target: SectionId, theme: &Theme, width: usize) {
    let spans = vec![
        Span::styled(BUTTON_MARKER, theme.primary_style()),
        Span::styled(label.to_string(), theme.accent_style()),
    ];
    block.push_target(centered(spans, width), label, TargetAction::Jump(target));
}

/// Link label wrapped like `marked`; the target sits on its first row
fn link(
    block: &mut PageBlock,
    indent: usize,
    marker: &str,
    label: &str,
    uri: String,
    theme: &Theme,
    width: usize,
) {
    let marker_width = display_width(marker);
    let mut rows = wrap(label, width.saturating_sub(indent + marker_width)).into_iter();

    let first = rows.next().unwrap_or_default();
    block.push_target(
        line(vec![
            pad(indent),
            Span::styled(marker.to_string(), theme.primary_style()),
            Span::styled(first, theme.link_style()),
        ]),
        label,
        TargetAction::Link(uri),
    );
    for row in rows {
        block.push(line(vec![
            pad(indent + marker_width),
            Span::styled(row, theme.link_style()),
        ]));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Blocks
// ─────────────────────────────────────────────────────────────────────────────

pub fn hero(content: &Portfolio, theme: &Theme, width: usize) -> PageBlock {
    let profile = &content.profile;
    let mut block = PageBlock::new(Some(SectionId::Home.anchor()));

    centered_paragraph(
        &mut block,
        &format!("[ {} ]", profile.badge),
        theme.primary_style(),
        width,
    );
    block.blank();
    centered_paragraph(
        &mut block,
        profile.name,
        theme.heading_style().add_modifier(Modifier::UNDERLINED),
        width,
    );
    centered_paragraph(&mut block, profile.tagline, theme.accent_style(), width);
    block.blank();
    centered_paragraph(&mut block, profile.summary, theme.text_style(), width);
    block.blank();

    for action in content.actions {
        button(&mut block, action.label, action.target, theme, width);
    }
    block.blank();

    link(&mut block, 0, "☎ ", profile.phone, profile.phone_uri(), theme, width);
    link(&mut block, 0, "✉ ", profile.email, profile.email_uri(), theme, width);
    marked(
        &mut block,
        0,
        "⌖ ",
        profile.location,
        theme.primary_style(),
        theme.muted_style(),
        width,
    );
    block.blank();

    centered_paragraph(
        &mut block,
        &format!("{IMAGE_MARKER}{} · {}", profile.portrait, profile.name),
        theme.muted_style(),
        width,
    );
    block.blank();
    block.push(centered(vec![Span::styled("↓", theme.muted_style())], width));
    block
}

pub fn about(about: &About, theme: &Theme, width: usize) -> PageBlock {
    let mut block = PageBlock::new(Some(SectionId::About.anchor()));
    heading(&mut block, about.heading, theme, width);

    for text in about.paragraphs {
        paragraph(&mut block, text, theme.text_style(), width, 0);
        block.blank();
    }

    for fact in about.facts {
        paragraph(&mut block, fact.label, theme.accent_style(), width, 0);
        paragraph(&mut block, fact.value, theme.text_style(), width, 2);
    }
    block
}

pub fn experience(
    title: &str,
    entries: &[ExperienceEntry],
    theme: &Theme,
    width: usize,
) -> PageBlock {
    let mut block = PageBlock::new(Some(SectionId::Experience.anchor()));
    heading(&mut block, title, theme, width);

    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            block.blank();
        }
        paragraph(&mut block, entry.title, theme.heading_style(), width, 0);
        paragraph(&mut block, entry.organization, theme.primary_style(), width, 2);
        if !entry.period.is_empty() {
            paragraph(&mut block, entry.period, theme.muted_style(), width, 2);
        }
        paragraph(&mut block, entry.description, theme.text_style(), width, 2);
    }
    block
}

pub fn skills(title: &str, categories: &[SkillCategory], theme: &Theme, width: usize) -> PageBlock {
    let mut block = PageBlock::new(Some(SectionId::Skills.anchor()));
    heading(&mut block, title, theme, width);

    for (i, category) in categories.iter().enumerate() {
        if i > 0 {
            block.blank();
        }
        marked(
            &mut block,
            0,
            &format!("{} ", category.icon),
            category.title,
            Style::default(),
            theme.heading_style(),
            width,
        );
        for skill in category.skills {
            marked(
                &mut block,
                2,
                "• ",
                skill,
                theme.primary_style(),
                theme.text_style(),
                width,
            );
        }
    }
    block
}

pub fn gallery(
    title: &str,
    intro: &str,
    items: &[GalleryItem],
    theme: &Theme,
    width: usize,
) -> PageBlock {
    let mut block = PageBlock::new(Some(SectionId::Gallery.anchor()));
    heading(&mut block, title, theme, width);
    centered_paragraph(&mut block, intro, theme.muted_style(), width);

    for item in items {
        block.blank();
        marked(
            &mut block,
            0,
            IMAGE_MARKER,
            item.image,
            theme.muted_style(),
            theme.muted_style(),
            width,
        );
        paragraph(&mut block, item.title, theme.heading_style(), width, 2);
        paragraph(&mut block, item.description, theme.text_style(), width, 2);
    }
    block
}

/// Rendered between gallery and contact; anchored but not a nav target
pub fn certifications(
    title: &str,
    certifications: &[Certification],
    theme: &Theme,
    width: usize,
) -> PageBlock {
    let mut block = PageBlock::new(Some("certifications"));
    heading(&mut block, title, theme, width);

    for (i, cert) in certifications.iter().enumerate() {
        if i > 0 {
            block.blank();
        }
        marked(
            &mut block,
            0,
            CERT_MARKER,
            cert.title,
            Style::default(),
            theme.heading_style(),
            width,
        );
        let indent = display_width(CERT_MARKER);
        paragraph(&mut block, cert.issuer, theme.primary_style(), width, indent);
        if !cert.year.is_empty() {
            paragraph(&mut block, cert.year, theme.muted_style(), width, indent);
        }
        if let Some(uri) = cert.link {
            link(
                &mut block,
                indent,
                LINK_MARKER,
                "View certificate",
                uri.to_string(),
                theme,
                width,
            );
        }
    }
    block
}

pub fn contact(contact: &Contact, profile: &Profile, theme: &Theme, width: usize) -> PageBlock {
    let mut block = PageBlock::new(Some(SectionId::Contact.anchor()));
    heading(&mut block, contact.heading, theme, width);
    paragraph(&mut block, contact.intro, theme.text_style(), width, 0);
    block.blank();

    link(&mut block, 0, "☎ ", profile.phone, profile.phone_uri(), theme, width);
    link(&mut block, 0, "✉ ", profile.email, profile.email_uri(), theme, width);
    marked(
        &mut block,
        0,
        "⌖ ",
        profile.location,
        theme.primary_style(),
        theme.text_style(),
        width,
    );
    block.blank();

    paragraph(
        &mut block,
        contact.availability,
        theme.muted_style().add_modifier(Modifier::ITALIC),
        width,
        0,
    );
    block
}

pub fn footer(footer: &Footer, theme: &Theme, width: usize) -> PageBlock {
    let mut block = PageBlock::new(None);
    block.push(line(vec![Span::styled("─".repeat(width), theme.border_style())]));
    centered_paragraph(&mut block, footer.copyright, theme.text_style(), width);
    centered_paragraph(&mut block, footer.motto, theme.muted_style(), width);
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PORTFOLIO;

    fn plain(block: &PageBlock) -> Vec<String> {
        block
            .lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn hero_buttons_jump_to_contact_and_about() {
        let block = hero(&PORTFOLIO, &Theme::default(), 76);
        let jumps: Vec<_> = block
            .targets
            .iter()
            .filter_map(|t| match t.action {
                TargetAction::Jump(s) => Some((t.label.as_str(), s)),
                TargetAction::Link(_) => None,
            })
            .collect();
        assert_eq!(
            jumps,
            [("Get In Touch", SectionId::Contact), ("Learn More", SectionId::About)]
        );
    }

    #[test]
    fn heading_is_centered_with_rule() {
        let mut block = PageBlock::new(None);
        heading(&mut block, "About Me", &Theme::default(), 20);
        let rows = plain(&block);

        // 2 padding + (20 - 8) / 2 offset
        assert_eq!(rows[0], "        About Me");
        assert_eq!(rows[1], "        ────────");
        assert_eq!(rows[2], "");
    }

    #[test]
    fn experience_skips_unpublished_period() {
        let block = experience(
            PORTFOLIO.experience_heading,
            PORTFOLIO.experience,
            &Theme::default(),
            76,
        );
        let rows = plain(&block);
        assert!(rows.iter().any(|r| r.contains("Fashion Design Lecturer")));
        assert!(rows.iter().any(|r| r.trim() == "Soham Institute"));
        assert!(block.targets.is_empty());
    }

    #[test]
    fn marked_text_indents_continuation_rows() {
        let mut block = PageBlock::new(None);
        marked(
            &mut block,
            0,
            CERT_MARKER,
            "Entrepreneurship Development Programme (EDP)",
            Style::default(),
            Style::default(),
            20,
        );
        let rows = plain(&block);
        assert!(rows.len() > 1);
        assert!(rows[0].starts_with("  🏆 "));
        assert!(rows[1].starts_with("     "));
    }

    #[test]
    fn long_link_wraps_with_target_on_first_row() {
        let mut block = PageBlock::new(None);
        link(
            &mut block,
            0,
            "✉ ",
            "nehalpatel19777@gmail.com",
            "mailto:nehalpatel19777@gmail.com".to_string(),
            &Theme::default(),
            16,
        );
        let rows = plain(&block);

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| display_width(r) <= 16 + PAGE_PADDING));
        assert!(rows[1].starts_with("    "));
        assert_eq!(block.targets.len(), 1);
        assert_eq!(block.targets[0].line, 0);
        assert_eq!(block.targets[0].label, "nehalpatel19777@gmail.com");
    }

    #[test]
    fn certification_without_link_has_no_target() {
        let certs = [Certification {
            title: "Unlinked",
            issuer: "Somewhere",
            year: "2020",
            link: None,
        }];
        let block = certifications("Certs", &certs, &Theme::default(), 40);
        assert!(block.targets.is_empty());
        assert!(plain(&block).iter().any(|r| r.trim() == "2020"));
    }
}
