//! Screen geometry for the page.
//!
//! The document fills the whole terminal; the nav bar is drawn over its top
//! rows, and the collapsed menu drops down directly beneath the nav bar.
use ratatui::prelude::*;

/// Rows occupied by the header overlay: padding, content, divider.
pub const NAV_BAR_HEIGHT: u16 = 3;

pub struct MainLayout;

impl MainLayout {
    /// Returns `[header, document]`. The header overlaps the document's top
    /// rows rather than pushing it down.
    pub fn responsive_layout(size: Rect) -> [Rect; 2] {
        let [header, _] = Layout::vertical([Constraint::Length(NAV_BAR_HEIGHT), Constraint::Min(0)]).areas(size);
        [header, size]
    }

    /// Row of the header that carries the brand and the nav entries.
    pub fn header_content_row(header: Rect) -> Rect {
        let [_, content, _] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)]).areas(header);
        content
    }

    /// Dropdown area for `item_count` entries, clamped to the screen.
    pub fn menu_area(size: Rect, item_count: usize) -> Rect {
        let wanted = u16::try_from(item_count).unwrap_or(u16::MAX).saturating_add(2);
        let available = size.height.saturating_sub(NAV_BAR_HEIGHT);
        Rect {
            x: size.x,
            y: size.y.saturating_add(NAV_BAR_HEIGHT),
            width: size.width,
            height: wanted.min(available),
        }
    }
}

/// First area containing `position`, if any.
pub fn hit_index(areas: &[Rect], column: u16, row: u16) -> Option<usize> {
    areas.iter().position(|area| area.contains(Position::new(column, row)))
}
