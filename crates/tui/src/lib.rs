//! # Folio TUI Library
//!
//! A single-page résumé rendered in the terminal. The page is laid out into
//! rows for the current width and scrolled through a viewport; a fixed header
//! tracks whether the reader has scrolled past a threshold, offers section
//! navigation with smooth scrolling, collapses into a menu on narrow
//! terminals, and toggles between light and dark themes.
//!
//! ## Architecture
//!
//! - [`nav`]: the navigation controller, scroll tracker, section registry,
//!   and the [`nav::Viewport`] boundary they depend on.
//! - [`document`]: section renderers, row layout, and the terminal viewport.
//! - [`app`]: application state and the `Msg` reducer.
//! - [`ui`]: components, themes, and the event-loop runtime.

pub mod app;
pub mod config;
pub mod document;
pub mod nav;
pub mod ui;

use anyhow::Result;
use chrono::{Datelike, Local};
use folio_types::ThemeMode;
use folio_util::UserPreferences;

pub use app::App;
pub use config::PortfolioConfig;
pub use ui::main_component::MainView;

/// Runs the interactive page until the reader quits.
///
/// # Errors
///
/// Terminal setup failures (raw mode, alternate screen) and drawing errors.
pub async fn run(config: PortfolioConfig, preferences: UserPreferences) -> Result<()> {
    ui::runtime::run_app(config, preferences).await
}

/// Lays out the page at `width` columns and returns it as plain text, led by
/// the header's brand and section list.
pub fn render_plain_text(width: u16, mode: ThemeMode) -> String {
    let portfolio = folio_content::portfolio();
    let theme = ui::theme::for_mode(mode);
    let document = document::build_document(width, &portfolio, theme.as_ref(), Local::now().year(), 0);
    let sections: Vec<&str> = nav::SectionRegistry::portfolio().iter().map(|item| item.label).collect();

    let mut out = format!("{}  |  {}\n", portfolio.profile.site, sections.join("  "));
    out.push_str(&document.plain_text());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_leads_with_the_header() {
        let text = render_plain_text(80, ThemeMode::Dark);
        let first = text.lines().next().unwrap();
        assert_eq!(first, "turgay.io  |  About  Experience  Skills  Education  Contact");
        assert!(text.lines().skip(1).any(|line| line.trim_end().ends_with(" Experience")));
        assert!(text.contains("All rights reserved."));
    }
}
