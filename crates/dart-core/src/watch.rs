//! Scoped event watchers.
//!
//! A [`Watcher`] is a piece of state that reacts to platform deliveries
//! (intersection changes, viewport resizes). It lives behind a
//! [`WatchHandle`] which can be cloned into event callbacks. Deliveries only
//! reach the watcher while a [`WatchGuard`] obtained from [`WatchHandle::attach`]
//! is alive; dropping the guard releases the watch on every exit path.

use std::cell::RefCell;
use std::rc::Rc;

/// State driven by a stream of platform events.
pub trait Watcher {
    /// The event delivered by the platform.
    type Event;

    /// Applies an event. Returns `true` if any observable state changed.
    fn handle(&mut self, event: Self::Event) -> bool;

    /// Called once when the last guard is dropped.
    fn released(&mut self) {}
}

struct Slot<W> {
    watcher: W,
    guards: usize,
}

/// Shared, single-threaded handle to a watcher.
pub struct WatchHandle<W> {
    inner: Rc<RefCell<Slot<W>>>,
}

impl<W> Clone for WatchHandle<W> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<W: Watcher> WatchHandle<W> {
    /// Wraps a watcher. The handle starts detached.
    pub fn new(watcher: W) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Slot { watcher, guards: 0 })),
        }
    }

    /// Begins observation. The watch stays attached until every returned
    /// guard has been dropped.
    pub fn attach(&self) -> WatchGuard<W> {
        self.inner.borrow_mut().guards += 1;
        WatchGuard {
            inner: Rc::clone(&self.inner),
        }
    }

    /// Returns whether at least one guard is alive.
    pub fn is_attached(&self) -> bool {
        self.inner.borrow().guards > 0
    }

    /// Delivers an event. Returns `true` if the watcher was attached and
    /// its state changed; detached handles drop the event.
    pub fn dispatch(&self, event: W::Event) -> bool {
        let mut slot = self.inner.borrow_mut();
        if slot.guards == 0 {
            tracing::debug!("dropping event for detached watcher");
            return false;
        }
        slot.watcher.handle(event)
    }

    /// Applies a direct mutation (e.g. a click) while attached.
    pub fn update<R>(&self, f: impl FnOnce(&mut W) -> R) -> Option<R> {
        let mut slot = self.inner.borrow_mut();
        if slot.guards == 0 {
            return None;
        }
        Some(f(&mut slot.watcher))
    }

    /// Reads the watcher's current state.
    pub fn with<R>(&self, f: impl FnOnce(&W) -> R) -> R {
        f(&self.inner.borrow().watcher)
    }
}

/// Keeps a [`WatchHandle`] attached for as long as it lives.
#[must_use = "dropping the guard immediately releases the watch"]
pub struct WatchGuard<W: Watcher> {
    inner: Rc<RefCell<Slot<W>>>,
}

impl<W: Watcher> Drop for WatchGuard<W> {
    fn drop(&mut self) {
        let mut slot = self.inner.borrow_mut();
        slot.guards = slot.guards.saturating_sub(1);
        if slot.guards == 0 {
            slot.watcher.released();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        total: u32,
        releases: u32,
    }

    impl Watcher for Counter {
        type Event = u32;

        fn handle(&mut self, event: u32) -> bool {
            self.total += event;
            event != 0
        }

        fn released(&mut self) {
            self.releases += 1;
        }
    }

    #[test]
    fn test_detached_handle_ignores_events() {
        let handle = WatchHandle::new(Counter::default());
        assert!(!handle.dispatch(5));
        assert_eq!(handle.update(|c| c.total += 1), None);
        assert_eq!(handle.with(|c| c.total), 0);
    }

    #[test]
    fn test_guard_scopes_delivery() {
        let handle = WatchHandle::new(Counter::default());
        {
            let _guard = handle.attach();
            assert!(handle.dispatch(3));
            assert!(!handle.dispatch(0));
        }
        assert!(!handle.dispatch(10));
        assert_eq!(handle.with(|c| c.total), 3);
        assert_eq!(handle.with(|c| c.releases), 1);
    }

    #[test]
    fn test_release_waits_for_last_guard() {
        let handle = WatchHandle::new(Counter::default());
        let first = handle.attach();
        let second = handle.clone().attach();

        drop(first);
        assert!(handle.is_attached());
        assert!(handle.dispatch(2));

        drop(second);
        assert!(!handle.is_attached());
        assert_eq!(handle.with(|c| c.releases), 1);
    }
}
