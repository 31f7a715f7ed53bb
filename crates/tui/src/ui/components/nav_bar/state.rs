use ratatui::layout::{Position, Rect};

use crate::ui::layout::hit_index;

/// Clickable element of the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Brand,
    ThemeToggle,
    MenuButton,
    /// Registry index of a section entry.
    Item(usize),
}

/// Layout of the last rendered header, kept for hit testing.
///
/// Areas that were not drawn in the last frame stay at `Rect::default()`,
/// which contains no position.
#[derive(Debug, Default, Clone)]
pub struct NavBarState {
    /// The full header overlay.
    pub last_area: Rect,
    pub brand_area: Rect,
    pub theme_toggle_area: Rect,
    /// Narrow layouts only.
    pub menu_button_area: Rect,
    /// Inline entries (wide layouts).
    pub item_areas: Vec<Rect>,
    /// Dropdown container (narrow layouts with the menu open).
    pub menu_area: Rect,
    pub menu_item_areas: Vec<Rect>,
    /// Test identifiers of the section entries drawn in the last frame.
    pub rendered_test_ids: Vec<String>,
}

impl NavBarState {
    /// Forgets the previous frame's layout.
    pub fn reset(&mut self, area: Rect) {
        *self = Self {
            last_area: area,
            ..Self::default()
        };
    }

    /// Whether a position falls on the header or its dropdown.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        let position = Position::new(column, row);
        self.last_area.contains(position) || self.menu_area.contains(position)
    }

    pub fn target_at(&self, column: u16, row: u16) -> Option<NavTarget> {
        if let Some(index) = hit_index(&self.menu_item_areas, column, row) {
            return Some(NavTarget::Item(index));
        }
        if let Some(index) = hit_index(&self.item_areas, column, row) {
            return Some(NavTarget::Item(index));
        }
        let position = Position::new(column, row);
        if self.brand_area.contains(position) {
            Some(NavTarget::Brand)
        } else if self.theme_toggle_area.contains(position) {
            Some(NavTarget::ThemeToggle)
        } else if self.menu_button_area.contains(position) {
            Some(NavTarget::MenuButton)
        } else {
            None
        }
    }
}
