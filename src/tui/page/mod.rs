//! Page document
//!
//! The portfolio is laid out once per (width, theme) into a flat buffer of
//! styled lines. Alongside the lines the builder records:
//!
//! - an anchor table mapping section anchors to line offsets, which is what
//!   [`ScrollEnvironment::locate`](crate::nav::ScrollEnvironment::locate)
//!   resolves against
//! - the activatable elements (buttons and links) with the line they sit on
//!
//! Each content category has its own mapping function in [`blocks`]; this
//! module only concatenates their output.

mod blocks;
mod wrap;

pub use wrap::{display_width, wrap};

use crate::content::Portfolio;
use crate::nav::SectionId;
use crate::tui::theme::Theme;
use ratatui::text::Line;

/// Horizontal padding on each side of the page text
pub const PAGE_PADDING: usize = 2;

/// Text never wraps narrower than this, even on tiny terminals
const MIN_TEXT_WIDTH: usize = 16;

/// What activating an element does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetAction {
    /// In-page button: select a section
    Jump(SectionId),
    /// Outbound URI (tel:, mailto:, https:)
    Link(String),
}

/// An activatable element on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Absolute line index in the document
    pub line: usize,
    pub label: String,
    pub action: TargetAction,
}

/// A named position in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub name: &'static str,
    pub line: usize,
}

/// Layout options that change the line buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOptions {
    /// Columns available for the page (scrollbar excluded)
    pub width: u16,
    pub footer: bool,
}

/// Output of one mapping function: lines plus block-relative anchors/targets
#[derive(Debug, Default)]
pub struct PageBlock {
    anchor: Option<&'static str>,
    lines: Vec<Line<'static>>,
    targets: Vec<Target>,
}

impl PageBlock {
    pub fn new(anchor: Option<&'static str>) -> Self {
        Self {
            anchor,
            ..Default::default()
        }
    }

    pub fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// Push a line that can be focused and activated
    pub fn push_target(&mut self, line: Line<'static>, label: impl Into<String>, action: TargetAction) {
        self.targets.push(Target {
            line: self.lines.len(),
            label: label.into(),
            action,
        });
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// The laid-out page
#[derive(Debug, Clone)]
pub struct Document {
    lines: Vec<Line<'static>>,
    anchors: Vec<Anchor>,
    targets: Vec<Target>,
    options: PageOptions,
}

impl Document {
    pub fn build(content: &Portfolio, theme: &Theme, options: PageOptions) -> Self {
        let text_width = (options.width as usize)
            .saturating_sub(PAGE_PADDING * 2)
            .max(MIN_TEXT_WIDTH);

        let mut blocks = vec![
            blocks::hero(content, theme, text_width),
            blocks::about(&content.about, theme, text_width),
            blocks::experience(content.experience_heading, content.experience, theme, text_width),
            blocks::skills(content.skills_heading, content.skills, theme, text_width),
            blocks::gallery(
                content.gallery_heading,
                content.gallery_intro,
                content.gallery,
                theme,
                text_width,
            ),
            blocks::certifications(
                content.certifications_heading,
                content.certifications,
                theme,
                text_width,
            ),
            blocks::contact(&content.contact, &content.profile, theme, text_width),
        ];
        if options.footer {
            blocks.push(blocks::footer(&content.footer, theme, text_width));
        }

        let mut document = Self {
            lines: Vec::new(),
            anchors: Vec::new(),
            targets: Vec::new(),
            options,
        };
        for block in blocks {
            document.append(block);
        }

        tracing::debug!(
            width = options.width,
            lines = document.lines.len(),
            targets = document.targets.len(),
            "page laid out"
        );
        document
    }

    fn append(&mut self, block: PageBlock) {
        if !self.lines.is_empty() {
            // Section separator
            self.lines.push(Line::default());
        }
        let base = self.lines.len();

        if let Some(name) = block.anchor {
            self.anchors.push(Anchor { name, line: base });
        }
        self.targets.extend(block.targets.into_iter().map(|t| Target {
            line: base + t.line,
            ..t
        }));
        self.lines.extend(block.lines);
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn options(&self) -> PageOptions {
        self.options
    }

    /// Line offset of the element tagged `name`
    pub fn anchor(&self, name: &str) -> Option<usize> {
        self.anchors.iter().find(|a| a.name == name).map(|a| a.line)
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    /// Anchor of the block containing `line`
    pub fn anchor_at(&self, line: usize) -> Option<Anchor> {
        self.anchors.iter().rev().find(|a| a.line <= line).copied()
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Unstyled text, one string per line
    pub fn plain_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.lines.iter().map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PORTFOLIO;

    fn build(width: u16) -> Document {
        Document::build(&PORTFOLIO, &Theme::default(), PageOptions { width, footer: true })
    }

    #[test]
    fn every_navigable_section_is_anchored() {
        let doc = build(100);
        for section in SectionId::ALL {
            assert!(
                doc.anchor(section.anchor()).is_some(),
                "no anchor for {}",
                section.anchor()
            );
        }
        assert_eq!(doc.anchor("home"), Some(0));
    }

    #[test]
    fn anchors_follow_page_order() {
        let doc = build(100);
        let names: Vec<_> = doc.anchors().iter().map(|a| a.name).collect();
        assert_eq!(
            names,
            ["home", "about", "experience", "skills", "gallery", "certifications", "contact"]
        );
        assert!(doc.anchors().windows(2).all(|w| w[0].line < w[1].line));
    }

    #[test]
    fn certifications_anchored_but_not_navigable() {
        let doc = build(100);
        assert!(doc.anchor("certifications").is_some());
        assert!(SectionId::parse("certifications").is_none());
    }

    #[test]
    fn targets_in_page_order() {
        let doc = build(100);
        let actions: Vec<_> = doc.targets().iter().map(|t| t.action.clone()).collect();

        assert_eq!(actions[0], TargetAction::Jump(SectionId::Contact));
        assert_eq!(actions[1], TargetAction::Jump(SectionId::About));
        assert_eq!(actions[2], TargetAction::Link("tel:9909242453".into()));
        assert_eq!(
            actions[3],
            TargetAction::Link("mailto:nehalpatel19777@gmail.com".into())
        );

        let cert_links = doc
            .targets()
            .iter()
            .filter(|t| matches!(&t.action, TargetAction::Link(uri) if uri.starts_with("https://")))
            .count();
        assert_eq!(cert_links, PORTFOLIO.certifications.len());

        assert!(doc.targets().windows(2).all(|w| w[0].line < w[1].line));
    }

    #[test]
    fn target_lines_show_their_label() {
        let doc = build(100);
        let plain: Vec<String> = doc.plain_lines().collect();
        for target in doc.targets() {
            assert!(
                plain[target.line].contains(&target.label),
                "line {} {:?} missing {:?}",
                target.line,
                plain[target.line],
                target.label
            );
        }
    }

    #[test]
    fn narrow_layout_is_longer_and_fits() {
        let wide = build(120);
        let narrow = build(40);
        assert!(narrow.len() > wide.len());
        assert_eq!(narrow.targets().len(), wide.targets().len());

    }

    #[test]
    fn no_line_wider_than_page_on_narrow_widths() {
        for width in 20..=40u16 {
            let doc = build(width);
            for line in doc.lines() {
                assert!(line.width() <= width as usize, "width {width}: {line:?}");
            }
            assert_eq!(doc.targets().len(), build(120).targets().len());
        }
    }

    #[test]
    fn footer_is_optional() {
        let with = build(80);
        let without = Document::build(
            &PORTFOLIO,
            &Theme::default(),
            PageOptions { width: 80, footer: false },
        );
        let has_copyright =
            |doc: &Document| doc.plain_lines().any(|l| l.contains(PORTFOLIO.footer.copyright));

        assert!(has_copyright(&with));
        assert!(!has_copyright(&without));
    }

    #[test]
    fn anchor_at_maps_lines_to_sections() {
        let doc = build(100);
        let about = doc.anchor("about").unwrap();
        assert_eq!(doc.anchor_at(0).map(|a| a.name), Some("home"));
        assert_eq!(doc.anchor_at(about).map(|a| a.name), Some("about"));
        assert_eq!(doc.anchor_at(about + 1).map(|a| a.name), Some("about"));
        assert_eq!(doc.anchor_at(doc.len()).map(|a| a.name), Some("contact"));
    }
}
