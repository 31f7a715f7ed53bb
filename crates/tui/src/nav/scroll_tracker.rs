use std::cell::Cell;
use std::rc::Rc;

use super::viewport::{ListenerId, Viewport};

/// Derives a "past threshold" signal from viewport scroll events.
///
/// The signal is `offset > threshold` (strict), re-evaluated on every scroll
/// event while the tracker is active. The listener registered on activation
/// shares the signal cell with the tracker, so no back-reference to the
/// tracker is needed. Deactivate before dropping so the viewport does not keep
/// an orphaned listener.
#[derive(Debug)]
pub struct ScrollTracker {
    threshold: u16,
    past_threshold: Rc<Cell<bool>>,
    subscription: Option<ListenerId>,
}

impl ScrollTracker {
    pub fn new(threshold: u16) -> Self {
        Self {
            threshold,
            past_threshold: Rc::new(Cell::new(false)),
            subscription: None,
        }
    }

    /// The predicate behind the signal.
    pub const fn exceeds(threshold: u16, offset: u16) -> bool {
        offset > threshold
    }

    pub const fn threshold(&self) -> u16 {
        self.threshold
    }

    pub fn past_threshold(&self) -> bool {
        self.past_threshold.get()
    }

    pub const fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    /// Subscribes to the viewport and evaluates the current offset right away.
    ///
    /// Calling this while already active is a no-op.
    pub fn activate<V: Viewport + ?Sized>(&mut self, viewport: &mut V) {
        if self.subscription.is_some() {
            return;
        }
        let threshold = self.threshold;
        let signal = Rc::clone(&self.past_threshold);
        signal.set(Self::exceeds(threshold, viewport.scroll_offset()));
        let id = viewport.subscribe(Box::new(move |offset| signal.set(Self::exceeds(threshold, offset))));
        self.subscription = Some(id);
    }

    /// Releases the viewport subscription and clears the signal. Pass the
    /// viewport given to [`activate`](Self::activate); any other viewport
    /// keeps its listeners.
    pub fn deactivate<V: Viewport + ?Sized>(&mut self, viewport: &mut V) {
        if let Some(id) = self.subscription.take() {
            viewport.unsubscribe(id);
        }
        self.past_threshold.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::testing::FakeViewport;

    #[test]
    fn threshold_is_strictly_greater_than() {
        assert!(!ScrollTracker::exceeds(20, 0));
        assert!(!ScrollTracker::exceeds(20, 20));
        assert!(ScrollTracker::exceeds(20, 21));
        assert!(!ScrollTracker::exceeds(0, 0));
        assert!(ScrollTracker::exceeds(0, 1));
    }

    #[test]
    fn signal_follows_every_scroll_event() {
        let mut viewport = FakeViewport::default();
        let mut tracker = ScrollTracker::new(20);
        tracker.activate(&mut viewport);
        assert!(!tracker.past_threshold());

        for (offset, expected) in [(20, false), (21, true), (50, true), (3, false), (u16::MAX, true)] {
            viewport.scroll_by_user(offset);
            assert_eq!(tracker.past_threshold(), expected, "offset {offset}");
        }
    }

    #[test]
    fn activation_reads_the_current_offset() {
        let mut viewport = FakeViewport::default();
        viewport.offset = 40;
        let mut tracker = ScrollTracker::new(20);
        tracker.activate(&mut viewport);
        assert!(tracker.past_threshold());
    }

    #[test]
    fn activating_twice_registers_one_listener() {
        let mut viewport = FakeViewport::default();
        let mut tracker = ScrollTracker::new(5);
        tracker.activate(&mut viewport);
        tracker.activate(&mut viewport);
        assert_eq!(viewport.listeners.len(), 1);
    }

    #[test]
    fn deactivation_releases_the_listener() {
        let mut viewport = FakeViewport::default();
        let mut tracker = ScrollTracker::new(5);
        tracker.activate(&mut viewport);
        viewport.scroll_by_user(10);
        assert!(tracker.past_threshold());

        tracker.deactivate(&mut viewport);
        assert!(viewport.listeners.is_empty());
        assert!(!tracker.is_active());
        assert!(!tracker.past_threshold());

        viewport.scroll_by_user(100);
        assert!(!tracker.past_threshold());
    }

    #[test]
    fn deactivating_against_another_viewport_keeps_its_listeners() {
        let mut tracked = FakeViewport::default();
        let mut unrelated = FakeViewport::default();
        unrelated.subscribe(Box::new(|_| {}));
        let mut tracker = ScrollTracker::new(5);
        tracker.activate(&mut tracked);

        tracker.deactivate(&mut unrelated);
        assert_eq!(unrelated.listeners.len(), 1);
        assert_eq!(tracked.listeners.len(), 1);
    }
}
