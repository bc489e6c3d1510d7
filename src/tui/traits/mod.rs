//! Component trait system for the viewer
//!
//! Components declare their own capabilities through traits instead of App
//! knowing how to render or scroll each piece of the screen.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         App                                 │
//! │   (orchestrator: owns NavController, routes input/mouse)    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!              ┌───────────────┼───────────────┐
//!              ▼               ▼               ▼
//!        ┌──────────┐   ┌──────────┐   ┌──────────┐
//!        │   Nav    │   │  Mobile  │   │   Page   │
//!        │   Bar    │   │   Menu   │   │   View   │
//!        └──────────┘   └──────────┘   └──────────┘
//!                                            │
//!                                   Implements traits:
//!                                 Component, Scrollable,
//!                                 Copyable, Interactive
//! ```
//!
//! `Component` is the only required trait. `Scrollable`, `Interactive` and
//! `Copyable` are added where a component scrolls, takes keys, or has a
//! link to hand to the clipboard.

mod component;
mod copyable;
mod interactive;
mod scrollable;

pub use component::{Component, ComponentId, RenderContext};
pub use copyable::{CopyResult, Copyable};
pub use interactive::{Handled, Interactive, ScrollableInteractive};
pub use scrollable::Scrollable;
