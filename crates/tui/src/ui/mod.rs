//! UI rendering module for the TUI application.
//!
//! Components, layout geometry, themes, and the terminal runtime.

pub mod components;
pub mod layout;
pub mod main_component;
pub mod runtime;
pub mod theme;
