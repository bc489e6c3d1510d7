// Components module - reusable UI building blocks
//
// Shell components are rendered on every frame:
// - Nav bar: monogram plus section entries, or the compact toggle button
// - Mobile menu: dropdown list shown while the menu flag is set
// - Page view: the scrolling portfolio document
// - Status bar: active section, scroll position, latest log line
//
// Each component is a focused, single-responsibility module.

pub mod mobile_menu;
pub mod nav_bar;
pub mod page_view;
pub mod scrollbar;
pub mod status_bar;
pub mod toast;

pub use mobile_menu::{MenuAction, MobileMenu};
pub use nav_bar::{NavBar, NavLayout};
pub use page_view::PageView;
pub use toast::Toast;
