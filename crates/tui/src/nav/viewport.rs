use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexMap;

/// Callback invoked with the new scroll offset after every scroll event.
pub type ScrollListener = Box<dyn FnMut(u16)>;

/// Handle returned by [`Viewport::subscribe`]; pass it back to unsubscribe.
///
/// Handles are unique across every viewport in the process, so a handle
/// offered to a viewport that did not issue it matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// The hosting viewport as seen by the navigation layer.
///
/// Offsets and anchor positions are measured in document rows from the top.
pub trait Viewport {
    /// Current scroll offset.
    fn scroll_offset(&self) -> u16;

    /// Registers a listener called on every scroll event.
    fn subscribe(&mut self, listener: ScrollListener) -> ListenerId;

    /// Removes a listener. Returns `false` when the handle was unknown.
    fn unsubscribe(&mut self, id: ListenerId) -> bool;

    /// Row of the anchor with the given identifier, if the document has one.
    fn anchor_offset(&self, anchor_id: &str) -> Option<u16>;

    /// Starts an animated scroll toward `target`. Fire-and-forget: there is no
    /// completion signal, and a second call re-targets the running animation.
    fn smooth_scroll_to(&mut self, target: u16);

    /// Smooth-scrolls so the anchor lands `header_offset` rows below the top
    /// and returns the target row, or `None` for an unknown anchor. Hosts that
    /// can relayout mid-animation override this to keep following the anchor.
    fn smooth_scroll_to_anchor(&mut self, anchor_id: &str, header_offset: u16) -> Option<u16> {
        let target = self.anchor_offset(anchor_id)?.saturating_sub(header_offset);
        self.smooth_scroll_to(target);
        Some(target)
    }
}

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(0);

/// Listener registry that viewport implementations embed.
#[derive(Default)]
pub struct ScrollListeners {
    listeners: IndexMap<ListenerId, ScrollListener>,
}

impl ScrollListeners {
    pub fn subscribe(&mut self, listener: ScrollListener) -> ListenerId {
        let id = ListenerId(NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed));
        self.listeners.insert(id, listener);
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.shift_remove(&id).is_some()
    }

    /// Delivers a scroll event to every listener in subscription order.
    pub fn notify(&mut self, offset: u16) {
        for listener in self.listeners.values_mut() {
            listener(offset);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for ScrollListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollListeners")
            .field("listeners", &self.listeners.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn notifies_in_subscription_order_until_unsubscribed() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = ScrollListeners::default();

        let first_seen = Rc::clone(&seen);
        let first = listeners.subscribe(Box::new(move |offset| first_seen.borrow_mut().push(("first", offset))));
        let second_seen = Rc::clone(&seen);
        listeners.subscribe(Box::new(move |offset| second_seen.borrow_mut().push(("second", offset))));

        listeners.notify(7);
        assert!(listeners.unsubscribe(first));
        assert!(!listeners.unsubscribe(first));
        listeners.notify(9);

        assert_eq!(*seen.borrow(), vec![("first", 7), ("second", 7), ("second", 9)]);
        assert_eq!(listeners.len(), 1);
    }

    #[test]
    fn a_foreign_handle_leaves_other_registries_alone() {
        let mut first = ScrollListeners::default();
        let mut second = ScrollListeners::default();
        let from_first = first.subscribe(Box::new(|_| {}));
        second.subscribe(Box::new(|_| {}));

        assert!(!second.unsubscribe(from_first));
        assert_eq!(second.len(), 1);
        assert!(first.unsubscribe(from_first));
    }

    #[test]
    fn handles_are_never_reused() {
        let mut listeners = ScrollListeners::default();
        let a = listeners.subscribe(Box::new(|_| {}));
        listeners.unsubscribe(a);
        let b = listeners.subscribe(Box::new(|_| {}));
        assert_ne!(a, b);
    }
}
