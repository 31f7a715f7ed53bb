//! Rendering helpers shared by components.

pub mod scrollbar;
