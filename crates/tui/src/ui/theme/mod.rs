//! Theme styling module for the TUI UI layer.
//!
//! Two palettes back the header's light/dark toggle. Both expose the same
//! semantic roles, so renderers never hard-code colors.

use folio_types::ThemeMode;

pub mod dark;
pub mod light;
pub mod roles;
pub mod theme_helpers;

pub use dark::DarkTheme;
pub use light::LightTheme;
pub use roles::{Theme, ThemeRoles};

/// Palette for the given mode.
pub fn for_mode(mode: ThemeMode) -> Box<dyn Theme> {
    match mode {
        ThemeMode::Light => Box::new(LightTheme::new()),
        ThemeMode::Dark => Box::new(DarkTheme::new()),
    }
}

/// Picks the starting mode: an explicit override (flag or environment) wins,
/// then the persisted preference, then dark.
pub fn resolve_mode(explicit: Option<ThemeMode>, preferred: Option<ThemeMode>) -> ThemeMode {
    explicit.or(preferred).unwrap_or_default()
}
