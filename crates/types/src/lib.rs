//! Shared type definitions for the Folio workspace.
//!
//! These types cross crate boundaries: the navigation model consumed by the
//! TUI controller, the theme mode shared with the preferences store, the link
//! model used by content renderers, and the `Msg`/`Effect` pair that drives
//! the application update loop.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A navigable section entry shown in the header.
///
/// Items are immutable and defined once at startup. The order of a list of
/// items is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NavItem {
    /// Human-facing label (e.g., "Experience"). Non-empty and unique within a registry.
    pub label: &'static str,
    /// Identifier of the document anchor this item scrolls to (e.g., "experience").
    pub anchor_id: &'static str,
}

impl NavItem {
    pub const fn new(label: &'static str, anchor_id: &'static str) -> Self {
        Self { label, anchor_id }
    }
}

/// Transient navigation UI state.
///
/// Owned by the navigation controller; reset to the default on activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    /// Whether the collapsed (narrow layout) menu is expanded.
    pub is_menu_open: bool,
    /// Whether the viewport has scrolled past the header threshold.
    pub is_scrolled_past_threshold: bool,
}

/// Binary color scheme choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// Canonical identifier used for persistence and CLI parsing.
    pub const fn id(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Returns the opposite mode.
    pub const fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when a theme identifier is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownThemeMode(pub String);

impl fmt::Display for UnknownThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme '{}' (expected 'light' or 'dark')", self.0)
    }
}

impl Error for UnknownThemeMode {}

impl FromStr for ThemeMode {
    type Err = UnknownThemeMode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" | "day" => Ok(ThemeMode::Light),
            "dark" | "night" => Ok(ThemeMode::Dark),
            _ => Err(UnknownThemeMode(value.to_string())),
        }
    }
}

/// An outbound link rendered in the document.
///
/// Every link except `mailto:` opens in a new browsing context and carries the
/// matching `target`/`rel` attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Link {
    href: String,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    /// Whether the link addresses a mail client rather than a web page.
    pub fn is_mailto(&self) -> bool {
        self.href
            .get(..7)
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case("mailto:"))
    }

    pub fn opens_new_context(&self) -> bool {
        !self.is_mailto()
    }

    /// Browsing-context target attribute, absent for `mailto:` links.
    pub fn target(&self) -> Option<&'static str> {
        self.opens_new_context().then_some("_blank")
    }

    /// Relationship attribute paired with `target`, absent for `mailto:` links.
    pub fn rel(&self) -> Option<&'static str> {
        self.opens_new_context().then_some("noopener noreferrer")
    }
}

/// Application messages routed into `App::update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic tick; advances smooth-scroll animations.
    Tick,
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// User scroll by a relative number of rows (`+` down, `-` up).
    ScrollLines(i16),
    /// User scroll by whole viewport pages.
    ScrollPages(i16),
    /// Flip the collapsed menu open/closed.
    ToggleMenu,
    /// Close the collapsed menu if it is open.
    CloseMenu,
    /// Navigate to the anchor with the given identifier.
    NavigateTo(String),
    /// Navigate to the nth registry entry (zero-based).
    NavigateToIndex(usize),
    /// Smooth scroll back to the top of the document.
    ScrollToTop,
    /// Flip between light and dark themes.
    ToggleTheme,
    /// Activate an outbound link.
    OpenLink(Link),
    /// Leave the application.
    Quit,
}

/// Side effects requested by state changes and executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Hand the link to the platform opener.
    OpenLink(Link),
    /// Save the selected theme as the user's preference.
    PersistTheme(ThemeMode),
    /// Stop the event loop and restore the terminal.
    Quit,
}
