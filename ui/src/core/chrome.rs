//! Shared top-bar visibility.
//!
//! Full-page views (record details meant for reading and printing) take over
//! the whole window. They do so by holding a [`TopBarLease`]: while at least
//! one lease is alive the layout leaves the navbar out. Dropping the lease
//! releases it, so unmounting the view restores the bar.

use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;

/// Count of outstanding hide requests.
#[derive(Debug)]
pub struct ChromeRegistry {
    hide_requests: AtomicUsize,
}

impl ChromeRegistry {
    pub const fn new() -> Self {
        Self {
            hide_requests: AtomicUsize::new(0),
        }
    }

    pub fn top_bar_visible(&self) -> bool {
        self.hide_requests.load(Ordering::SeqCst) == 0
    }
}

impl Default for ChromeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide registry used by the app.
pub static CHROME: ChromeRegistry = ChromeRegistry::new();

/// Reactive mirror of [`ChromeRegistry::top_bar_visible`], provided by the layout.
#[derive(Clone, Copy, PartialEq)]
pub struct TopBarVisibility(pub Signal<bool>);

/// Scoped hide request. The top bar stays hidden until every lease is dropped.
pub struct TopBarLease {
    registry: &'static ChromeRegistry,
    mirror: Option<Signal<bool>>,
}

impl TopBarLease {
    pub fn acquire(registry: &'static ChromeRegistry, mirror: Option<Signal<bool>>) -> Self {
        registry.hide_requests.fetch_add(1, Ordering::SeqCst);
        Self { registry, mirror }
    }

    fn sync_mirror(&self) {
        let Some(mut mirror) = self.mirror else {
            return;
        };
        let visible = self.registry.top_bar_visible();
        // The mirror's owner may already be gone during teardown.
        if let Ok(mut current) = mirror.try_write() {
            if *current != visible {
                *current = visible;
            }
        };
    }
}

impl Drop for TopBarLease {
    fn drop(&mut self) {
        self.registry.hide_requests.fetch_sub(1, Ordering::SeqCst);
        self.sync_mirror();
    }
}

/// Provide the reactive visibility mirror. Call once in the layout component.
pub fn use_top_bar_visibility() -> Signal<bool> {
    let visible = use_signal(|| CHROME.top_bar_visible());
    use_context_provider(|| TopBarVisibility(visible));
    visible
}

/// Hide the shared top bar for as long as the calling component is mounted.
pub fn use_top_bar_hidden() {
    let mirror = try_use_context::<TopBarVisibility>().map(|v| v.0);
    use_hook(|| Rc::new(TopBarLease::acquire(&CHROME, mirror)));

    // Publish after mount rather than writing the layout's signal mid-render.
    use_effect(move || {
        if let Some(mut mirror) = mirror {
            mirror.set(CHROME.top_bar_visible());
        }
    });
}
