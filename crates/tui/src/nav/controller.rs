use folio_types::NavigationState;
use tracing::debug;

use super::registry::SectionRegistry;
use super::scroll_tracker::ScrollTracker;
use super::viewport::Viewport;

/// Rows scrolled before the header switches to its "scrolled" style.
pub const DEFAULT_SCROLL_THRESHOLD: u16 = 2;

/// Rows occluded by the fixed header; anchors land just below it.
pub const DEFAULT_HEADER_OFFSET: u16 = 3;

/// Tunables for the navigation controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationConfig {
    pub scroll_threshold: u16,
    pub header_offset: u16,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            header_offset: DEFAULT_HEADER_OFFSET,
        }
    }
}

/// Owns menu visibility and the scroll-linked header state, and mediates
/// every section navigation.
///
/// Menu state machine (meaningful on narrow layouts only):
///
/// ```text
/// Closed --toggle_menu--> Open --toggle_menu--> Closed
/// Open   --navigate_to--> Closed
/// ```
///
/// Every operation is total. The viewport is passed in per call rather than
/// owned so the page can keep the document and the controller side by side.
#[derive(Debug)]
pub struct NavigationController {
    registry: SectionRegistry,
    tracker: ScrollTracker,
    is_menu_open: bool,
    header_offset: u16,
}

impl NavigationController {
    pub fn new(registry: SectionRegistry, config: NavigationConfig) -> Self {
        Self {
            registry,
            tracker: ScrollTracker::new(config.scroll_threshold),
            is_menu_open: false,
            header_offset: config.header_offset,
        }
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub const fn header_offset(&self) -> u16 {
        self.header_offset
    }

    pub const fn scroll_threshold(&self) -> u16 {
        self.tracker.threshold()
    }

    pub const fn is_menu_open(&self) -> bool {
        self.is_menu_open
    }

    pub fn is_scrolled_past_threshold(&self) -> bool {
        self.tracker.past_threshold()
    }

    pub const fn is_active(&self) -> bool {
        self.tracker.is_active()
    }

    /// Snapshot of the transient navigation state.
    pub fn state(&self) -> NavigationState {
        NavigationState {
            is_menu_open: self.is_menu_open,
            is_scrolled_past_threshold: self.tracker.past_threshold(),
        }
    }

    /// Resets state and starts tracking the viewport's scroll offset.
    pub fn activate<V: Viewport + ?Sized>(&mut self, viewport: &mut V) {
        self.is_menu_open = false;
        self.tracker.activate(viewport);
    }

    /// Stops tracking and discards transient state.
    pub fn deactivate<V: Viewport + ?Sized>(&mut self, viewport: &mut V) {
        self.tracker.deactivate(viewport);
        self.is_menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.is_menu_open = !self.is_menu_open;
    }

    pub fn close_menu(&mut self) {
        self.is_menu_open = false;
    }

    /// Closes the menu and smooth-scrolls so the anchor sits just below the
    /// header. An unknown anchor only closes the menu.
    pub fn navigate_to<V: Viewport + ?Sized>(&mut self, viewport: &mut V, anchor_id: &str) {
        self.is_menu_open = false;
        match viewport.smooth_scroll_to_anchor(anchor_id, self.header_offset) {
            Some(target) => debug!(anchor_id, target, "navigating to section"),
            None => debug!(anchor_id, "navigation target not found; ignoring"),
        }
    }

    /// Navigates to the registry entry at `index`; out-of-range indices only
    /// close the menu.
    pub fn navigate_to_index<V: Viewport + ?Sized>(&mut self, viewport: &mut V, index: usize) {
        match self.registry.get(index).map(|item| item.anchor_id) {
            Some(anchor_id) => self.navigate_to(viewport, anchor_id),
            None => self.is_menu_open = false,
        }
    }

    pub fn scroll_to_top<V: Viewport + ?Sized>(&mut self, viewport: &mut V) {
        viewport.smooth_scroll_to(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::testing::FakeViewport;

    fn controller(threshold: u16) -> NavigationController {
        NavigationController::new(
            SectionRegistry::portfolio(),
            NavigationConfig {
                scroll_threshold: threshold,
                header_offset: 3,
            },
        )
    }

    fn viewport() -> FakeViewport {
        FakeViewport::with_anchors(&[("about", 200), ("experience", 40), ("skills", 90), ("contact", 195)])
    }

    #[test]
    fn toggling_twice_returns_to_closed() {
        let mut controller = controller(20);
        assert!(!controller.is_menu_open());
        controller.toggle_menu();
        assert!(controller.is_menu_open());
        controller.toggle_menu();
        assert!(!controller.is_menu_open());
    }

    #[test]
    fn navigation_always_closes_the_menu() {
        let mut viewport = viewport();
        let mut controller = controller(20);
        controller.activate(&mut viewport);

        controller.toggle_menu();
        controller.navigate_to(&mut viewport, "skills");
        assert!(!controller.is_menu_open());

        controller.navigate_to(&mut viewport, "skills");
        assert!(!controller.is_menu_open());
    }

    #[test]
    fn navigation_targets_anchor_minus_header_offset() {
        let mut viewport = viewport();
        let mut controller = controller(20);
        controller.activate(&mut viewport);

        controller.navigate_to(&mut viewport, "experience");
        assert_eq!(viewport.scroll_requests, vec![37]);
        assert_eq!(viewport.offset, 37);
        assert!(controller.is_scrolled_past_threshold());
    }

    #[test]
    fn anchors_near_the_top_saturate_at_zero() {
        let mut viewport = FakeViewport::with_anchors(&[("hero", 1)]);
        let mut controller = controller(20);
        controller.navigate_to(&mut viewport, "hero");
        assert_eq!(viewport.scroll_requests, vec![0]);
    }

    #[test]
    fn missing_anchor_only_closes_the_menu() {
        let mut viewport = viewport();
        let mut controller = controller(20);
        controller.activate(&mut viewport);
        viewport.scroll_by_user(50);
        controller.toggle_menu();

        let before = controller.state();
        controller.navigate_to(&mut viewport, "projects");

        assert!(viewport.scroll_requests.is_empty());
        assert_eq!(viewport.offset, 50);
        assert_eq!(controller.state().is_scrolled_past_threshold, before.is_scrolled_past_threshold);
        assert!(!controller.is_menu_open());
    }

    #[test]
    fn repeated_navigation_re_issues_the_scroll() {
        let mut viewport = viewport();
        let mut controller = controller(20);
        controller.navigate_to(&mut viewport, "skills");
        controller.navigate_to(&mut viewport, "skills");
        assert_eq!(viewport.scroll_requests, vec![87, 87]);
    }

    #[test]
    fn navigate_by_index_uses_registry_order() {
        let mut viewport = viewport();
        let mut controller = controller(20);
        controller.navigate_to_index(&mut viewport, 1);
        assert_eq!(viewport.scroll_requests, vec![37]);

        controller.toggle_menu();
        controller.navigate_to_index(&mut viewport, 42);
        assert!(!controller.is_menu_open());
        assert_eq!(viewport.scroll_requests.len(), 1);
    }

    #[test]
    fn scroll_to_top_targets_zero_from_any_state() {
        let mut viewport = viewport();
        let mut controller = controller(20);
        controller.activate(&mut viewport);
        viewport.scroll_by_user(3000);
        controller.toggle_menu();

        controller.scroll_to_top(&mut viewport);
        assert_eq!(viewport.offset, 0);
        assert!(!controller.is_scrolled_past_threshold());
    }

    #[test]
    fn activation_resets_state_and_deactivation_releases_listener() {
        let mut viewport = viewport();
        let mut controller = controller(20);
        controller.toggle_menu();
        controller.activate(&mut viewport);
        assert_eq!(controller.state(), NavigationState::default());
        assert_eq!(viewport.listeners.len(), 1);

        controller.deactivate(&mut viewport);
        assert!(viewport.listeners.is_empty());
        assert!(!controller.is_active());
    }
}
