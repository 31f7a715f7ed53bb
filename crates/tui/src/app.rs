//! Application state and the message reducer.
//!
//! `App` owns the laid-out document, the viewport onto it, the navigation
//! controller, and the active theme. Input is translated into [`Msg`]s by the
//! UI components; [`App::update`] applies them and returns the [`Effect`]s the
//! runtime must carry out (opening links, saving the theme, quitting).

use chrono::{Datelike, Local};
use folio_content::Portfolio;
use folio_types::{Effect, Msg, ThemeMode};
use tracing::{debug, info};

use crate::config::PortfolioConfig;
use crate::document::{DocumentViewport, build_document};
use crate::nav::{NavigationController, SectionRegistry, Viewport};
use crate::ui::components::nav_bar::NavBarState;
use crate::ui::layout::NAV_BAR_HEIGHT;
use crate::ui::theme::{self, Theme};

pub struct App {
    pub config: PortfolioConfig,
    pub portfolio: Portfolio,
    pub theme: Box<dyn Theme>,
    pub viewport: DocumentViewport,
    pub navigation: NavigationController,
    /// Hit areas recorded by the last header render.
    pub nav_bar: NavBarState,
    width: u16,
    height: u16,
    year: i32,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("config", &self.config)
            .field("theme", &self.theme.mode())
            .field("offset", &self.viewport.scroll_offset())
            .field("navigation", &self.navigation.state())
            .field("size", &(self.width, self.height))
            .finish_non_exhaustive()
    }
}

impl App {
    /// Lays out the page for a `width` x `height` terminal and starts
    /// scroll tracking.
    pub fn new(config: PortfolioConfig, theme_mode: ThemeMode, width: u16, height: u16) -> Self {
        Self::with_portfolio(config, folio_content::portfolio(), theme_mode, width, height)
    }

    pub fn with_portfolio(
        config: PortfolioConfig,
        portfolio: Portfolio,
        theme_mode: ThemeMode,
        width: u16,
        height: u16,
    ) -> Self {
        let theme = theme::for_mode(theme_mode);
        let year = Local::now().year();
        let document = build_document(width, &portfolio, theme.as_ref(), year, NAV_BAR_HEIGHT);
        let mut viewport = DocumentViewport::new(document, height);
        let mut navigation = NavigationController::new(SectionRegistry::portfolio(), config.navigation());
        navigation.activate(&mut viewport);

        Self {
            config,
            portfolio,
            theme,
            viewport,
            navigation,
            nav_bar: NavBarState::default(),
            width,
            height,
            year,
        }
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.mode()
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn is_narrow(&self) -> bool {
        self.config.is_narrow(self.width)
    }

    /// Whether the runtime should tick quickly.
    pub fn is_animating(&self) -> bool {
        self.viewport.is_animating()
    }

    /// Registry index of the section currently under the header, if any.
    pub fn active_section(&self) -> Option<usize> {
        let probe = self
            .viewport
            .scroll_offset()
            .saturating_add(self.navigation.header_offset());
        self.navigation
            .registry()
            .iter()
            .enumerate()
            .filter_map(|(index, item)| self.viewport.anchor_offset(item.anchor_id).map(|row| (index, row)))
            .filter(|(_, row)| *row <= probe)
            .max_by_key(|(_, row)| *row)
            .map(|(index, _)| index)
    }

    /// Applies one message and returns the side effects it requires.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::Tick => {
                self.viewport.tick();
            }
            Msg::Resize(width, height) => self.resize(*width, *height),
            Msg::ScrollLines(delta) => self.viewport.scroll_lines(*delta),
            Msg::ScrollPages(delta) => self.viewport.scroll_pages(*delta),
            Msg::ToggleMenu => {
                if self.is_narrow() {
                    self.navigation.toggle_menu();
                } else {
                    debug!(width = self.width, "menu toggle ignored on wide layout");
                }
            }
            Msg::CloseMenu => self.navigation.close_menu(),
            Msg::NavigateTo(anchor_id) => self.navigation.navigate_to(&mut self.viewport, anchor_id),
            Msg::NavigateToIndex(index) => self.navigation.navigate_to_index(&mut self.viewport, *index),
            Msg::ScrollToTop => {
                self.navigation.close_menu();
                self.navigation.scroll_to_top(&mut self.viewport);
            }
            Msg::ToggleTheme => {
                let mode = self.theme_mode().toggled();
                info!(theme = %mode, "switching theme");
                self.theme = theme::for_mode(mode);
                self.relayout();
                return vec![Effect::PersistTheme(mode)];
            }
            Msg::OpenLink(link) => {
                self.navigation.close_menu();
                return vec![Effect::OpenLink(link.clone())];
            }
            Msg::Quit => return vec![Effect::Quit],
        }
        Vec::new()
    }

    /// Releases the scroll subscription; call once before exiting.
    pub fn shutdown(&mut self) {
        self.navigation.deactivate(&mut self.viewport);
    }

    fn resize(&mut self, width: u16, height: u16) {
        let relayout = width != self.width;
        self.width = width;
        self.height = height;
        if relayout {
            self.relayout();
        }
        self.viewport.set_viewport_height(height);
        if !self.is_narrow() {
            self.navigation.close_menu();
        }
    }

    fn relayout(&mut self) {
        let document = build_document(
            self.width,
            &self.portfolio,
            self.theme.as_ref(),
            self.year,
            NAV_BAR_HEIGHT,
        );
        self.viewport.set_document(document);
    }
}

#[cfg(test)]
mod tests {
    use folio_types::Link;

    use super::*;

    fn app(width: u16) -> App {
        App::new(PortfolioConfig::default(), ThemeMode::Dark, width, 30)
    }

    #[test]
    fn construction_activates_scroll_tracking() {
        let app = app(120);
        assert!(app.navigation.is_active());
        assert_eq!(app.viewport.listener_count(), 1);
        assert!(!app.navigation.is_scrolled_past_threshold());
    }

    #[test]
    fn scrolling_flips_the_header_state() {
        let mut app = app(120);
        app.update(&Msg::ScrollLines(3));
        assert!(app.navigation.is_scrolled_past_threshold());
        app.update(&Msg::ScrollLines(-1));
        assert!(!app.navigation.is_scrolled_past_threshold());
    }

    #[test]
    fn menu_toggles_only_on_narrow_layouts() {
        let mut wide = app(120);
        wide.update(&Msg::ToggleMenu);
        assert!(!wide.navigation.is_menu_open());

        let mut narrow = app(60);
        narrow.update(&Msg::ToggleMenu);
        assert!(narrow.navigation.is_menu_open());
        narrow.update(&Msg::Resize(140, 30));
        assert!(!narrow.navigation.is_menu_open());
    }

    #[test]
    fn navigation_ticks_to_the_section() {
        let mut app = app(120);
        app.update(&Msg::NavigateTo("skills".into()));
        assert!(app.is_animating());
        while app.is_animating() {
            app.update(&Msg::Tick);
        }
        let row = app.viewport.anchor_offset("skills").unwrap();
        let expected = row.saturating_sub(3).min(app.viewport.metrics().max_offset());
        assert_eq!(app.viewport.scroll_offset(), expected);
        assert_eq!(app.active_section(), Some(2));
    }

    #[test]
    fn narrowing_mid_animation_still_lands_on_the_section() {
        let mut app = App::new(PortfolioConfig::default(), ThemeMode::Dark, 160, 30);
        app.update(&Msg::NavigateTo("education".into()));
        app.update(&Msg::Tick);
        app.update(&Msg::Resize(50, 30));
        while app.is_animating() {
            app.update(&Msg::Tick);
        }
        let row = app.viewport.anchor_offset("education").unwrap();
        let expected = row.saturating_sub(3).min(app.viewport.metrics().max_offset());
        assert_eq!(app.viewport.scroll_offset(), expected);
    }

    #[test]
    fn theme_toggle_persists_and_relayouts() {
        let mut app = app(120);
        let effects = app.update(&Msg::ToggleTheme);
        assert_eq!(effects, vec![Effect::PersistTheme(ThemeMode::Light)]);
        assert_eq!(app.theme_mode(), ThemeMode::Light);
        assert_eq!(app.viewport.listener_count(), 1);
    }

    #[test]
    fn links_and_quit_become_effects() {
        let mut app = app(60);
        app.update(&Msg::ToggleMenu);
        let link = Link::new("https://turgay.io/");
        assert_eq!(app.update(&Msg::OpenLink(link.clone())), vec![Effect::OpenLink(link)]);
        assert!(!app.navigation.is_menu_open());
        assert_eq!(app.update(&Msg::Quit), vec![Effect::Quit]);
    }

    #[test]
    fn narrowing_the_terminal_relayouts_but_keeps_anchors() {
        let mut app = app(120);
        let wide_height = app.viewport.document().height();
        app.update(&Msg::Resize(50, 30));
        assert!(app.viewport.document().height() > wide_height);
        assert!(app.viewport.anchor_offset("contact").is_some());
    }

    #[test]
    fn shutdown_releases_the_listener() {
        let mut app = app(120);
        app.shutdown();
        assert_eq!(app.viewport.listener_count(), 0);
        assert!(!app.navigation.is_active());
    }
}
