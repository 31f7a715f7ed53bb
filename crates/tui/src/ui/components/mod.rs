//! UI components: header navigation and the scrolling document.

pub mod common;
pub mod component;
pub mod document;
pub mod nav_bar;

pub use component::*;
pub use document::DocumentComponent;
pub use nav_bar::NavBarComponent;
