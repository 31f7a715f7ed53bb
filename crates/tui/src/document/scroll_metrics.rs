//! Row bookkeeping for the document viewport: how tall the laid-out page is,
//! how many rows the terminal shows, and which row sits at the top.

/// Scroll position in terminal rows. The offset never leaves
/// `0..=max_offset()`, whichever dimension changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
    offset: u16,
    content_height: u16,
    viewport_height: u16,
}

impl ScrollMetrics {
    pub const fn new(content_height: u16, viewport_height: u16) -> Self {
        Self {
            offset: 0,
            content_height,
            viewport_height,
        }
    }

    pub const fn offset(&self) -> u16 {
        self.offset
    }

    pub const fn content_height(&self) -> u16 {
        self.content_height
    }

    pub const fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    pub const fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Whether the page is taller than the (non-empty) window.
    pub const fn is_scrollable(&self) -> bool {
        self.viewport_height > 0 && self.content_height > self.viewport_height
    }

    pub fn set_content_height(&mut self, content_height: u16) {
        self.content_height = content_height;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn set_viewport_height(&mut self, viewport_height: u16) {
        self.viewport_height = viewport_height;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn scroll_to(&mut self, offset: u16) {
        self.offset = offset.min(self.max_offset());
    }

    /// Moves by `rows` (negative is up), stopping at either end.
    pub fn scroll_by(&mut self, rows: i32) {
        let next = i32::from(self.offset).saturating_add(rows).clamp(0, i32::from(self.max_offset()));
        self.offset = u16::try_from(next).unwrap_or(self.offset);
    }
}
