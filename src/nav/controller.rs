//! Navigation & scroll controller
//!
//! Owns the two pieces of transient UI state (mobile menu visibility and the
//! highlighted section) and turns selections into scroll requests against a
//! [`ScrollEnvironment`].

use super::SectionId;

/// What the controller needs from whatever renders the page
///
/// `locate` finds the element tagged with an anchor and returns its offset.
/// `scroll_into_view` is fire-and-forget: the environment animates toward the
/// offset and a later request replaces an earlier one.
pub trait ScrollEnvironment {
    fn locate(&self, anchor: &str) -> Option<usize>;

    fn scroll_into_view(&mut self, offset: usize);
}

/// Result of a section selection, for logging and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// A scroll-into-view request was issued for this offset
    Requested(usize),
    /// No element carries the section's anchor; nothing scrolled
    TargetMissing,
}

/// A navigation entry as the nav bar should draw it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub section: SectionId,
    pub active: bool,
}

/// Menu and active-section state for one viewer instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavController {
    menu_open: bool,
    active: SectionId,
}

impl NavController {
    /// Menu closed, `home` active
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Invert the mobile menu flag and return the new value
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        tracing::debug!(open = self.menu_open, "menu toggled");
        self.menu_open
    }

    /// Make `section` active, close the menu, then scroll to it if it exists
    pub fn select<E>(&mut self, section: SectionId, env: &mut E) -> ScrollOutcome
    where
        E: ScrollEnvironment + ?Sized,
    {
        self.active = section;
        self.menu_open = false;

        match env.locate(section.anchor()) {
            Some(offset) => {
                env.scroll_into_view(offset);
                tracing::debug!(%section, offset, "scroll requested");
                ScrollOutcome::Requested(offset)
            }
            None => {
                tracing::debug!(%section, "no element for section, skipping scroll");
                ScrollOutcome::TargetMissing
            }
        }
    }

    /// String-keyed selection; an unknown id leaves every piece of state alone
    pub fn select_by_id<E>(&mut self, id: &str, env: &mut E) -> Option<ScrollOutcome>
    where
        E: ScrollEnvironment + ?Sized,
    {
        match SectionId::parse(id) {
            Some(section) => Some(self.select(section, env)),
            None => {
                tracing::warn!(id, "ignoring selection of unknown section");
                None
            }
        }
    }

    pub fn is_active(&self, section: SectionId) -> bool {
        self.active == section
    }

    /// Navigation list in page order, exactly one entry flagged active
    pub fn entries(&self) -> impl Iterator<Item = NavEntry> + '_ {
        SectionId::ALL.into_iter().map(move |section| NavEntry {
            section,
            active: self.is_active(section),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Environment that records every scroll request
    #[derive(Default)]
    struct RecordingEnv {
        anchors: HashMap<&'static str, usize>,
        requests: Vec<usize>,
    }

    impl RecordingEnv {
        fn with_all_sections() -> Self {
            let anchors = SectionId::ALL
                .iter()
                .enumerate()
                .map(|(i, s)| (s.anchor(), i * 40))
                .collect();
            Self {
                anchors,
                requests: Vec::new(),
            }
        }
    }

    impl ScrollEnvironment for RecordingEnv {
        fn locate(&self, anchor: &str) -> Option<usize> {
            self.anchors.get(anchor).copied()
        }

        fn scroll_into_view(&mut self, offset: usize) {
            self.requests.push(offset);
        }
    }

    #[test]
    fn initial_state() {
        let nav = NavController::new();
        assert!(!nav.menu_open());
        assert_eq!(nav.active(), SectionId::Home);
    }

    #[test]
    fn toggle_parity() {
        for n in 0..9 {
            let mut nav = NavController::new();
            for _ in 0..n {
                nav.toggle_menu();
            }
            assert_eq!(nav.menu_open(), n % 2 == 1, "after {n} toggles");
        }
    }

    #[test]
    fn select_sets_active_and_closes_menu() {
        for section in SectionId::ALL {
            for menu_open in [false, true] {
                let mut nav = NavController::new();
                if menu_open {
                    nav.toggle_menu();
                }
                let mut env = RecordingEnv::with_all_sections();
                nav.select(section, &mut env);
                assert_eq!(nav.active(), section);
                assert!(!nav.menu_open());
            }
        }
    }

    #[test]
    fn select_issues_one_scroll_request() {
        let mut nav = NavController::new();
        let mut env = RecordingEnv::with_all_sections();

        let outcome = nav.select(SectionId::About, &mut env);

        assert_eq!(outcome, ScrollOutcome::Requested(40));
        assert_eq!(env.requests, vec![40]);
    }

    #[test]
    fn missing_target_changes_state_without_scrolling() {
        let mut nav = NavController::new();
        let mut env = RecordingEnv::default();
        nav.toggle_menu();

        let outcome = nav.select(SectionId::Gallery, &mut env);

        assert_eq!(outcome, ScrollOutcome::TargetMissing);
        assert_eq!(nav.active(), SectionId::Gallery);
        assert!(!nav.menu_open());
        assert!(env.requests.is_empty());
    }

    #[test]
    fn unknown_id_leaves_state_unchanged() {
        let mut nav = NavController::new();
        let mut env = RecordingEnv::with_all_sections();
        nav.select(SectionId::Skills, &mut env);
        nav.toggle_menu();
        let before = nav.clone();

        assert_eq!(nav.select_by_id("certifications", &mut env), None);

        assert_eq!(nav, before);
        assert_eq!(env.requests.len(), 1);
    }

    #[test]
    fn select_by_id_accepts_known_ids() {
        let mut nav = NavController::new();
        let mut env = RecordingEnv::with_all_sections();

        let outcome = nav.select_by_id("experience", &mut env);

        assert_eq!(outcome, Some(ScrollOutcome::Requested(80)));
        assert_eq!(nav.active(), SectionId::Experience);
    }

    #[test]
    fn repeated_select_is_idempotent() {
        let mut nav = NavController::new();
        let mut env = RecordingEnv::with_all_sections();

        nav.select(SectionId::Contact, &mut env);
        let after_first = nav.clone();
        nav.select(SectionId::Contact, &mut env);

        assert_eq!(nav, after_first);
        assert_eq!(nav.active(), SectionId::Contact);
        assert!(!nav.menu_open());
    }

    #[test]
    fn exactly_one_entry_active() {
        let mut nav = NavController::new();
        let mut env = RecordingEnv::with_all_sections();
        for section in SectionId::ALL {
            nav.select(section, &mut env);
            let active: Vec<_> = nav.entries().filter(|e| e.active).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].section, section);
        }
    }

    #[test]
    fn open_menu_then_tap_skills() {
        let mut nav = NavController::new();
        let mut env = RecordingEnv::with_all_sections();

        assert!(nav.toggle_menu());
        assert_eq!((nav.menu_open(), nav.active()), (true, SectionId::Home));

        nav.select(SectionId::Skills, &mut env);

        assert_eq!((nav.menu_open(), nav.active()), (false, SectionId::Skills));
        assert_eq!(env.requests, vec![120]);
    }
}
