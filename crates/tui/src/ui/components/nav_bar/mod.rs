//! Header navigation bar.
//!
//! Draws the brand, the section entries, and the theme toggle over the top of
//! the page. Wide terminals show the entries inline; narrow terminals collapse
//! them behind a menu button and show them in a dropdown while the menu is
//! open. Every click resolves through the hit areas recorded in
//! [`NavBarState`] during the previous render.

mod nav_bar_component;
mod state;

pub use nav_bar_component::{NavBarComponent, menu_button_label, theme_toggle_label};
pub use state::{NavBarState, NavTarget};
