//! The scrolling page body.

mod document_component;

pub use document_component::DocumentComponent;
