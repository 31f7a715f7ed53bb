use tracing::trace;

use super::builder::Document;
use super::scroll_metrics::ScrollMetrics;
use crate::nav::{ListenerId, ScrollListener, ScrollListeners, Viewport};

/// Divisor applied to the remaining distance on every animation tick.
const EASING_DIVISOR: u16 = 4;

/// The terminal window onto the laid-out document.
///
/// Scroll events (user scrolling, animation steps, relayout clamping) are
/// delivered to subscribers only when the offset actually changes. Smooth
/// scrolling is driven by [`DocumentViewport::tick`]: each tick covers a
/// quarter of the remaining distance (at least one row), so the animation
/// always converges.
#[derive(Debug, Default)]
pub struct DocumentViewport {
    document: Document,
    metrics: ScrollMetrics,
    listeners: ScrollListeners,
    animation_target: Option<u16>,
    /// Anchor and header offset behind `animation_target`, re-resolved when
    /// the document is relaid out.
    animation_anchor: Option<(String, u16)>,
}

impl DocumentViewport {
    pub fn new(document: Document, viewport_height: u16) -> Self {
        Self {
            metrics: ScrollMetrics::new(document.height(), viewport_height),
            document,
            listeners: ScrollListeners::default(),
            animation_target: None,
            animation_anchor: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn metrics(&self) -> &ScrollMetrics {
        &self.metrics
    }

    /// Swaps in a relaid-out document, keeping the row offset where possible.
    pub fn set_document(&mut self, document: Document) {
        let before = self.metrics.offset();
        self.metrics.set_content_height(document.height());
        self.document = document;
        if let Some((anchor_id, header_offset)) = &self.animation_anchor
            && let Some(row) = self.document.anchor_row(anchor_id)
        {
            self.animation_target = Some(row.saturating_sub(*header_offset));
        }
        self.clamp_animation_target();
        self.notify_if_moved(before);
    }

    pub fn set_viewport_height(&mut self, viewport_height: u16) {
        let before = self.metrics.offset();
        self.metrics.set_viewport_height(viewport_height);
        self.clamp_animation_target();
        self.notify_if_moved(before);
    }

    /// User-driven line scroll; cancels any running animation.
    pub fn scroll_lines(&mut self, delta: i16) {
        let before = self.metrics.offset();
        self.stop_animation();
        self.metrics.scroll_by(i32::from(delta));
        self.notify_if_moved(before);
    }

    /// User-driven page scroll; cancels any running animation.
    pub fn scroll_pages(&mut self, delta: i16) {
        let before = self.metrics.offset();
        self.stop_animation();
        self.metrics.scroll_by(i32::from(delta).saturating_mul(i32::from(self.metrics.viewport_height())));
        self.notify_if_moved(before);
    }

    pub fn is_animating(&self) -> bool {
        self.animation_target.is_some()
    }

    pub fn animation_target(&self) -> Option<u16> {
        self.animation_target
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Advances the smooth-scroll animation by one step. Returns `true` when
    /// the offset moved.
    pub fn tick(&mut self) -> bool {
        let Some(target) = self.animation_target else {
            return false;
        };
        let current = self.metrics.offset();
        if current == target {
            self.stop_animation();
            return false;
        }

        let distance = current.abs_diff(target);
        let step = distance.div_ceil(EASING_DIVISOR).max(1);
        let next = if target > current {
            current.saturating_add(step)
        } else {
            current.saturating_sub(step)
        };
        self.metrics.scroll_to(next);
        if self.metrics.offset() == target {
            self.stop_animation();
        }
        trace!(from = current, to = self.metrics.offset(), target, "smooth scroll step");
        self.notify_if_moved(current)
    }

    /// Runs the animation to completion.
    pub fn settle(&mut self) {
        while self.tick() {}
        self.stop_animation();
    }

    fn stop_animation(&mut self) {
        self.animation_target = None;
        self.animation_anchor = None;
    }

    fn clamp_animation_target(&mut self) {
        if let Some(target) = self.animation_target {
            self.animation_target = Some(target.min(self.metrics.max_offset()));
        }
    }

    fn notify_if_moved(&mut self, before: u16) -> bool {
        let after = self.metrics.offset();
        if after == before {
            return false;
        }
        self.listeners.notify(after);
        true
    }
}

impl Viewport for DocumentViewport {
    fn scroll_offset(&self) -> u16 {
        self.metrics.offset()
    }

    fn subscribe(&mut self, listener: ScrollListener) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn anchor_offset(&self, anchor_id: &str) -> Option<u16> {
        self.document.anchor_row(anchor_id)
    }

    fn smooth_scroll_to(&mut self, target: u16) {
        self.animation_target = Some(target.min(self.metrics.max_offset()));
        self.animation_anchor = None;
    }

    fn smooth_scroll_to_anchor(&mut self, anchor_id: &str, header_offset: u16) -> Option<u16> {
        let target = self.document.anchor_row(anchor_id)?.saturating_sub(header_offset);
        self.smooth_scroll_to(target);
        self.animation_anchor = Some((anchor_id.to_string(), header_offset));
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::document::builder::DocumentBuilder;

    fn tall_document(rows: u16) -> Document {
        let mut builder = DocumentBuilder::new(40);
        for index in 0..rows {
            if index == 500 {
                builder.anchor("middle");
            }
            builder.line(format!("row {index}"));
        }
        builder.build()
    }

    fn recorded(viewport: &mut DocumentViewport) -> Rc<RefCell<Vec<u16>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        viewport.subscribe(Box::new(move |offset| sink.borrow_mut().push(offset)));
        events
    }

    #[test]
    fn animation_eases_toward_the_target_and_stops() {
        let mut viewport = DocumentViewport::new(tall_document(1000), 20);
        let events = recorded(&mut viewport);

        viewport.smooth_scroll_to(100);
        assert!(viewport.is_animating());
        viewport.settle();

        assert_eq!(viewport.scroll_offset(), 100);
        assert!(!viewport.is_animating());
        let events = events.borrow();
        assert_eq!(events.first(), Some(&25));
        assert_eq!(events.last(), Some(&100));
        assert!(events.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn scrolling_to_top_from_deep_in_the_page_settles_at_zero() {
        let mut viewport = DocumentViewport::new(tall_document(4000), 20);
        viewport.scroll_lines(3000);
        assert_eq!(viewport.scroll_offset(), 3000);

        viewport.smooth_scroll_to(0);
        viewport.settle();
        assert_eq!(viewport.scroll_offset(), 0);
    }

    #[test]
    fn a_second_request_retargets_the_animation() {
        let mut viewport = DocumentViewport::new(tall_document(1000), 20);
        viewport.smooth_scroll_to(400);
        viewport.tick();
        viewport.tick();
        viewport.smooth_scroll_to(10);
        viewport.settle();
        assert_eq!(viewport.scroll_offset(), 10);
    }

    #[test]
    fn user_scroll_cancels_the_animation() {
        let mut viewport = DocumentViewport::new(tall_document(1000), 20);
        viewport.smooth_scroll_to(400);
        viewport.tick();
        let mid = viewport.scroll_offset();
        viewport.scroll_lines(1);
        assert!(!viewport.is_animating());
        assert!(!viewport.tick());
        assert_eq!(viewport.scroll_offset(), mid + 1);
    }

    #[test]
    fn targets_clamp_to_the_last_page() {
        let mut viewport = DocumentViewport::new(tall_document(50), 20);
        viewport.smooth_scroll_to(400);
        assert_eq!(viewport.animation_target(), Some(30));
        viewport.settle();
        assert_eq!(viewport.scroll_offset(), 30);
    }

    #[test]
    fn shrinking_the_document_clamps_and_notifies() {
        let mut viewport = DocumentViewport::new(tall_document(1000), 20);
        viewport.scroll_lines(900);
        let events = recorded(&mut viewport);

        viewport.set_document(tall_document(100));
        assert_eq!(viewport.scroll_offset(), 80);
        assert_eq!(*events.borrow(), vec![80]);
    }

    #[test]
    fn idle_scrolls_emit_no_events() {
        let mut viewport = DocumentViewport::new(tall_document(10), 20);
        let events = recorded(&mut viewport);
        viewport.scroll_lines(5);
        viewport.scroll_pages(-1);
        assert!(events.borrow().is_empty());
        assert!(!viewport.tick());
    }

    #[test]
    fn anchor_scrolls_follow_the_anchor_through_relayout() {
        let mut viewport = DocumentViewport::new(tall_document(1000), 20);
        assert_eq!(viewport.smooth_scroll_to_anchor("middle", 3), Some(497));
        viewport.tick();

        let mut builder = DocumentBuilder::new(40);
        for index in 0..1200 {
            if index == 700 {
                builder.anchor("middle");
            }
            builder.line(format!("row {index}"));
        }
        viewport.set_document(builder.build());
        assert_eq!(viewport.animation_target(), Some(697));
        viewport.settle();
        assert_eq!(viewport.scroll_offset(), 697);
    }

    #[test]
    fn plain_scroll_requests_forget_the_anchor() {
        let mut viewport = DocumentViewport::new(tall_document(1000), 20);
        viewport.smooth_scroll_to_anchor("middle", 3);
        viewport.smooth_scroll_to(10);
        viewport.set_document(tall_document(1000));
        assert_eq!(viewport.animation_target(), Some(10));
        assert_eq!(viewport.smooth_scroll_to_anchor("missing", 3), None);
    }

    #[test]
    fn anchors_come_from_the_document() {
        let viewport = DocumentViewport::new(tall_document(1000), 20);
        assert_eq!(viewport.anchor_offset("middle"), Some(500));
        assert_eq!(viewport.anchor_offset("missing"), None);
    }
}
