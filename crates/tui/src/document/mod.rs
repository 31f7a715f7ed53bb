//! The scrollable page.
//!
//! Static content is laid out into styled rows for the current terminal width
//! ([`sections`] on top of [`builder`]), and [`DocumentViewport`] exposes that
//! layout to the navigation layer as a [`crate::nav::Viewport`].

pub mod builder;
pub mod scroll_metrics;
pub mod sections;
mod viewport;

pub use builder::{Document, DocumentAction, DocumentBuilder, HitRegion, MIN_DOCUMENT_WIDTH, RowItem};
pub use scroll_metrics::ScrollMetrics;
pub use sections::{PAGE_MARGIN, build_document, link_label};
pub use viewport::DocumentViewport;
