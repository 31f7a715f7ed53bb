//! Scroll-aware navigation.
//!
//! The navigation controller is the single source of truth for menu
//! visibility and for the header's scroll-linked "scrolled" style. It is built
//! from three pieces:
//!
//! - [`Viewport`]: the boundary to whatever hosts the document (scroll offset,
//!   scroll subscriptions, anchor lookup, smooth-scroll command).
//! - [`ScrollTracker`]: turns scroll events into a past-threshold signal.
//! - [`SectionRegistry`]: the static, ordered label → anchor mapping.
//!
//! All state lives on the UI event loop; nothing here is `Send`.

mod controller;
mod registry;
mod scroll_tracker;
mod viewport;

pub use controller::{DEFAULT_HEADER_OFFSET, DEFAULT_SCROLL_THRESHOLD, NavigationConfig, NavigationController};
pub use registry::{PORTFOLIO_SECTIONS, RegistryError, SectionRegistry};
pub use scroll_tracker::ScrollTracker;
pub use viewport::{ListenerId, ScrollListener, ScrollListeners, Viewport};
