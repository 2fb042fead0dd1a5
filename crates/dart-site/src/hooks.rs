//! Hooks binding `dart_core` watchers to component lifetimes.

use std::rc::Rc;

use dart_core::{IntersectionEntry, RevealController, RevealTarget, WatchHandle, Watcher};
use dioxus::prelude::*;

/// A watcher attached for the lifetime of the calling component.
///
/// Reads subscribe the component to changes; deliveries that change the
/// watcher trigger a re-render.
pub struct UseWatch<W: Watcher + 'static> {
    handle: CopyValue<WatchHandle<W>>,
    revision: Signal<u64>,
}

impl<W: Watcher + 'static> Clone for UseWatch<W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W: Watcher + 'static> Copy for UseWatch<W> {}

impl<W: Watcher + 'static> UseWatch<W> {
    /// Forwards a platform event to the watcher.
    pub fn dispatch(&self, event: W::Event) {
        if self.handle.read().dispatch(event) {
            self.bump();
        }
    }

    /// Applies a direct mutation, e.g. from a click handler.
    pub fn update<R>(&self, f: impl FnOnce(&mut W) -> R) -> Option<R> {
        let result = self.handle.read().update(f);
        if result.is_some() {
            self.bump();
        }
        result
    }

    /// Reads the watcher and subscribes the current component.
    pub fn read<R>(&self, f: impl FnOnce(&W) -> R) -> R {
        let _revision = self.revision.read();
        self.handle.read().with(f)
    }

    fn bump(&self) {
        let mut revision = self.revision;
        *revision.write() += 1;
    }
}

impl UseWatch<RevealController> {
    /// `onvisible` handler forwarding intersections for `target`.
    ///
    /// Uses the platform's default observer: no 0.1 threshold and no
    /// `-100px` bottom root margin.
    pub fn on_visible(self, target: RevealTarget) -> impl FnMut(Event<VisibleData>) + 'static {
        move |evt: Event<VisibleData>| match evt.data().is_intersecting() {
            Ok(is_intersecting) => self.dispatch(vec![IntersectionEntry {
                target,
                is_intersecting,
            }]),
            Err(e) => tracing::debug!("visibility unavailable for {target:?}: {e:?}"),
        }
    }
}

/// Creates a watcher and attaches it until the component unmounts.
pub fn use_watch<W: Watcher + 'static>(init: impl FnOnce() -> W) -> UseWatch<W> {
    let handle = use_hook(|| CopyValue::new(WatchHandle::new(init())));

    // The guard is stored in the hook list and dropped with the component.
    use_hook(|| Rc::new(handle.read().attach()));

    let revision = use_signal(|| 0u64);
    UseWatch { handle, revision }
}

/// Scrolls the window to the top when the calling page mounts.
pub fn use_scroll_to_top() {
    use_hook(|| {
        let _ = document::eval("window.scrollTo(0, 0);");
    });
}
