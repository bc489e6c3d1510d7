// Key press gating
//
// Terminals report a held key as a stream of presses, and many never send a
// release. Each key is classified once:
// - Single: fires on the first press, then again only after release or after
//   a quiet period (section shortcuts, Enter, toggles)
// - Repeat: fires on the first press, then at a steady rate once the key has
//   been held past an initial delay (scrolling, menu cursor)

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Presses of a single-shot key closer together than this are one press
const SINGLE_SHOT_QUIET: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBehavior {
    Single,
    Repeat { delay: Duration, every: Duration },
}

impl KeyBehavior {
    /// Line scrolling and menu cursor
    pub const LINE: Self = Self::Repeat {
        delay: Duration::from_millis(250),
        every: Duration::from_millis(40),
    };

    /// Page and jump-to-end scrolling
    pub const PAGE: Self = Self::Repeat {
        delay: Duration::from_millis(300),
        every: Duration::from_millis(30),
    };

    /// Behavior of a key in the viewer; anything unlisted is single-shot
    pub fn for_key(key: KeyCode) -> Self {
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Char('j' | 'k') => Self::LINE,
            KeyCode::PageUp
            | KeyCode::PageDown
            | KeyCode::Char(' ')
            | KeyCode::Home
            | KeyCode::End => Self::PAGE,
            _ => Self::Single,
        }
    }
}

/// One held key
#[derive(Debug, Clone, Copy)]
struct Held {
    since: Instant,
    last_fired: Instant,
}

/// Decides which key presses turn into actions
#[derive(Debug, Default)]
pub struct InputHandler {
    held: HashMap<KeyCode, Held>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press; true if it should trigger an action
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.press_at(key, Instant::now())
    }

    /// Forget a key so its next press fires immediately
    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    fn press_at(&mut self, key: KeyCode, now: Instant) -> bool {
        let behavior = KeyBehavior::for_key(key);

        let Some(held) = self.held.get_mut(&key) else {
            self.held.insert(
                key,
                Held {
                    since: now,
                    last_fired: now,
                },
            );
            return true;
        };

        let fire = match behavior {
            // No release seen: a long enough gap means the key went up
            KeyBehavior::Single => now.duration_since(held.last_fired) >= SINGLE_SHOT_QUIET,
            KeyBehavior::Repeat { delay, every } => {
                now.duration_since(held.since) >= delay
                    && now.duration_since(held.last_fired) >= every
            }
        };

        if fire {
            held.last_fired = now;
        }
        fire
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::SectionId;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn single_shot_fires_once_until_release() {
        let mut input = InputHandler::new();
        let t0 = Instant::now();

        assert!(input.press_at(KeyCode::Enter, t0));
        assert!(!input.press_at(KeyCode::Enter, t0 + ms(20)));
        assert!(!input.press_at(KeyCode::Enter, t0 + ms(60)));

        input.handle_key_release(KeyCode::Enter);
        assert!(input.press_at(KeyCode::Enter, t0 + ms(70)));
    }

    #[test]
    fn single_shot_refires_after_quiet_period_without_release() {
        let mut input = InputHandler::new();
        let t0 = Instant::now();

        assert!(input.press_at(KeyCode::Char('m'), t0));
        assert!(input.press_at(KeyCode::Char('m'), t0 + SINGLE_SHOT_QUIET));
    }

    #[test]
    fn section_shortcuts_are_single_shot_and_independent() {
        let mut input = InputHandler::new();
        let t0 = Instant::now();

        let keys: Vec<KeyCode> = SectionId::ALL
            .into_iter()
            .map(|section| KeyCode::Char(section.shortcut()))
            .collect();
        assert!(keys
            .iter()
            .all(|key| KeyBehavior::for_key(*key) == KeyBehavior::Single));

        assert!(input.press_at(keys[2], t0));
        assert!(!input.press_at(keys[2], t0 + ms(10)));
        assert!(input.press_at(keys[3], t0 + ms(10)));
    }

    #[test]
    fn held_scroll_key_repeats_after_delay() {
        // LINE: 250ms delay, then every 40ms
        let mut input = InputHandler::new();
        let t0 = Instant::now();

        assert!(input.press_at(KeyCode::Down, t0));
        assert!(!input.press_at(KeyCode::Down, t0 + ms(100)));
        assert!(input.press_at(KeyCode::Down, t0 + ms(260)));
        assert!(!input.press_at(KeyCode::Down, t0 + ms(280)));
        assert!(input.press_at(KeyCode::Down, t0 + ms(300)));
    }

    #[test]
    fn classification() {
        assert_eq!(KeyBehavior::for_key(KeyCode::Char('j')), KeyBehavior::LINE);
        assert_eq!(KeyBehavior::for_key(KeyCode::End), KeyBehavior::PAGE);
        assert_eq!(KeyBehavior::for_key(KeyCode::Tab), KeyBehavior::Single);
    }
}
