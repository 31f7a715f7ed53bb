//! Runtime tunables for the portfolio page.
//!
//! Values are layered: built-in defaults, then environment variables, then
//! whatever the command line sets on top. Invalid environment values are
//! logged and ignored.

use std::env;
use std::str::FromStr;

use folio_types::ThemeMode;
use tracing::warn;

use crate::nav::{DEFAULT_HEADER_OFFSET, DEFAULT_SCROLL_THRESHOLD, NavigationConfig};

pub const SCROLL_THRESHOLD_ENV: &str = "FOLIO_SCROLL_THRESHOLD";
pub const NARROW_BREAKPOINT_ENV: &str = "FOLIO_NARROW_BREAKPOINT";
pub const THEME_ENV: &str = "FOLIO_THEME";

/// Terminal width (columns) below which the header collapses into a menu.
pub const DEFAULT_NARROW_BREAKPOINT: u16 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortfolioConfig {
    /// Rows scrolled before the header switches to its scrolled style.
    pub scroll_threshold: u16,
    /// Rows hidden under the header; section navigation lands below them.
    pub header_offset: u16,
    pub narrow_breakpoint: u16,
    /// Explicit theme override; `None` defers to the saved preference.
    pub theme: Option<ThemeMode>,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            header_offset: DEFAULT_HEADER_OFFSET,
            narrow_breakpoint: DEFAULT_NARROW_BREAKPOINT,
            theme: None,
        }
    }
}

impl PortfolioConfig {
    /// Defaults overlaid with `FOLIO_*` environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            scroll_threshold: env_value(SCROLL_THRESHOLD_ENV).unwrap_or(defaults.scroll_threshold),
            narrow_breakpoint: env_value(NARROW_BREAKPOINT_ENV).unwrap_or(defaults.narrow_breakpoint),
            theme: env_value(THEME_ENV).or(defaults.theme),
            ..defaults
        }
    }

    pub fn navigation(&self) -> NavigationConfig {
        NavigationConfig {
            scroll_threshold: self.scroll_threshold,
            header_offset: self.header_offset,
        }
    }

    /// Whether a terminal `width` columns wide uses the collapsed header.
    pub fn is_narrow(&self, width: u16) -> bool {
        width < self.narrow_breakpoint
    }
}

fn env_value<T>(name: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = env::var(name).ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse() {
        Ok(value) => Some(value),
        Err(error) => {
            warn!(variable = name, value = trimmed, %error, "ignoring invalid environment override");
            None
        }
    }
}
