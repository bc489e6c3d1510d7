//! Navigable section identifiers
//!
//! The page has a fixed, ordered set of destinations. Certifications are
//! rendered on the page but are not part of this set.

use serde::Serialize;

/// One of the page's navigable content blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    Home,
    About,
    Experience,
    Skills,
    Gallery,
    Contact,
}

impl SectionId {
    /// All navigable sections in page order
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Gallery,
        SectionId::Contact,
    ];

    /// Anchor tag the section is rendered under
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Skills => "skills",
            SectionId::Gallery => "gallery",
            SectionId::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Skills => "Skills",
            SectionId::Gallery => "Gallery",
            SectionId::Contact => "Contact",
        }
    }

    /// Position in the navigation order (0-based)
    pub fn index(self) -> usize {
        match self {
            SectionId::Home => 0,
            SectionId::About => 1,
            SectionId::Experience => 2,
            SectionId::Skills => 3,
            SectionId::Gallery => 4,
            SectionId::Contact => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse a section identifier (case-insensitive, surrounding whitespace ignored)
    pub fn parse(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ALL
            .into_iter()
            .find(|section| section.anchor().eq_ignore_ascii_case(id))
    }

    /// Number key that jumps to this section ('1'..='6')
    pub fn shortcut(self) -> char {
        char::from(b'1' + self.index() as u8)
    }

    /// Inverse of [`SectionId::shortcut`]
    pub fn from_shortcut(c: char) -> Option<Self> {
        c.to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(Self::from_index)
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.anchor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_matches_navigation() {
        let anchors: Vec<_> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(
            anchors,
            vec!["home", "about", "experience", "skills", "gallery", "contact"]
        );
        for (i, section) in SectionId::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
            assert_eq!(SectionId::from_index(i), Some(*section));
        }
        assert_eq!(SectionId::from_index(6), None);
    }

    #[test]
    fn parse_accepts_known_ids_only() {
        assert_eq!(SectionId::parse("skills"), Some(SectionId::Skills));
        assert_eq!(SectionId::parse(" Experience "), Some(SectionId::Experience));
        assert_eq!(SectionId::parse("certifications"), None);
        assert_eq!(SectionId::parse(""), None);
    }

    #[test]
    fn shortcuts_round_trip() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_shortcut(section.shortcut()), Some(section));
        }
        assert_eq!(SectionId::from_shortcut('0'), None);
        assert_eq!(SectionId::from_shortcut('7'), None);
        assert_eq!(SectionId::from_shortcut('x'), None);
    }

    #[test]
    fn labels_lowercase_to_anchor() {
        for section in SectionId::ALL {
            assert_eq!(section.label().to_lowercase(), section.anchor());
        }
    }
}
