//! Portfolio content records
//!
//! Everything on the page that is not interactive state lives here as
//! immutable, `'static` reference data. The records are `Serialize` so the
//! whole portfolio can be exported with `folio content`.

mod data;

pub use data::PORTFOLIO;

use crate::nav::SectionId;
use serde::Serialize;

/// Hero banner and contact identity
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: &'static str,
    /// Monogram shown at the left of the navigation bar
    pub monogram: &'static str,
    pub badge: &'static str,
    pub tagline: &'static str,
    pub summary: &'static str,
    /// Opaque asset reference, displayed but never loaded
    pub portrait: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub location: &'static str,
}

impl Profile {
    pub fn phone_uri(&self) -> String {
        format!("tel:{}", self.phone)
    }

    pub fn email_uri(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// In-page call-to-action button
#[derive(Debug, Clone, Serialize)]
pub struct CallToAction {
    pub label: &'static str,
    pub target: SectionId,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub target: SectionId,
}

/// Labelled fact card in the about section
#[derive(Debug, Clone, Serialize)]
pub struct Fact {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct About {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
    pub facts: &'static [Fact],
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub organization: &'static str,
    /// Empty when the period is not published
    pub period: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct GalleryItem {
    pub image: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
    pub link: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    pub heading: &'static str,
    pub intro: &'static str,
    pub availability: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Footer {
    pub copyright: &'static str,
    pub motto: &'static str,
}

/// The complete page, in render order
#[derive(Debug, Clone, Serialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub nav: &'static [NavItem],
    pub actions: &'static [CallToAction],
    pub about: About,
    pub experience_heading: &'static str,
    pub experience: &'static [ExperienceEntry],
    pub skills_heading: &'static str,
    pub skills: &'static [SkillCategory],
    pub gallery_heading: &'static str,
    pub gallery_intro: &'static str,
    pub gallery: &'static [GalleryItem],
    pub certifications_heading: &'static str,
    pub certifications: &'static [Certification],
    pub contact: Contact,
    pub footer: Footer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_items_cover_every_section_in_order() {
        let targets: Vec<_> = PORTFOLIO.nav.iter().map(|item| item.target).collect();
        assert_eq!(targets, SectionId::ALL.to_vec());
        for item in PORTFOLIO.nav {
            assert_eq!(item.label, item.target.label());
        }
    }

    #[test]
    fn content_counts() {
        assert_eq!(PORTFOLIO.experience.len(), 3);
        assert_eq!(PORTFOLIO.skills.len(), 3);
        assert_eq!(PORTFOLIO.gallery.len(), 4);
        assert_eq!(PORTFOLIO.certifications.len(), 6);
        assert!(PORTFOLIO.skills.iter().all(|c| c.skills.len() == 5));
    }

    #[test]
    fn link_uris() {
        assert_eq!(PORTFOLIO.profile.phone_uri(), "tel:9909242453");
        assert_eq!(
            PORTFOLIO.profile.email_uri(),
            "mailto:nehalpatel19777@gmail.com"
        );
        assert!(PORTFOLIO
            .certifications
            .iter()
            .filter_map(|c| c.link)
            .all(|link| link.starts_with("https://")));
    }

    #[test]
    fn exports_as_json() {
        let json = serde_json::to_value(&PORTFOLIO).unwrap();
        assert_eq!(json["profile"]["name"], "Nehal Patel");
        assert_eq!(json["nav"][2]["target"], "experience");
        assert_eq!(json["actions"][0]["target"], "contact");
    }
}
