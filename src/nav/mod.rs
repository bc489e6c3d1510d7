// Navigation module - menu and active-section state
//
// The controller holds no terminal types. It reaches the page only through
// the ScrollEnvironment trait; key presses, mouse clicks and in-page buttons
// all funnel into the same two operations.

mod controller;
mod section;

pub use controller::{NavController, NavEntry, ScrollEnvironment, ScrollOutcome};
pub use section::SectionId;
