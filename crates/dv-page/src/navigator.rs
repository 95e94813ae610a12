//! Route state and post-load scroll behavior.
//!
//! The navigator is a reaction rule, not a render concern: once content is
//! loaded, and again whenever the route changes while loaded, it asks the
//! [`ScrollService`] to position the viewport. It never fires while content
//! is pending, so the viewport cannot move before the page has anything to
//! lay out.

/// Router-owned location state. Read-only from the page's perspective.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteState {
    /// Current URL path.
    pub path: String,
    /// In-page anchor selector (e.g. `"#install"`), if any.
    pub hash: Option<String>,
}

impl RouteState {
    /// Route with a path and no anchor.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            hash: None,
        }
    }

    /// Set the in-page anchor.
    #[must_use]
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }
}

/// Viewport scrolling capability.
///
/// Implementations own the actual viewport (a browser bridge, an embedded
/// webview, a test fake). Keeping this behind a trait means headless
/// rendering and tests substitute a no-op or recording implementation.
pub trait ScrollService: Send + Sync {
    /// Scroll the first element matching `selector` into view.
    ///
    /// Returns false when no element matches; the caller treats a miss as
    /// a silent no-op.
    fn scroll_into_view(&self, selector: &str) -> bool;

    /// Scroll the viewport to an absolute position.
    fn scroll_to(&self, x: u32, y: u32);
}

/// Scroll service that does nothing. For headless rendering.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopScroll;

impl ScrollService for NoopScroll {
    fn scroll_into_view(&self, _selector: &str) -> bool {
        false
    }

    fn scroll_to(&self, _x: u32, _y: u32) {}
}

/// Post-load scroll reaction rule.
///
/// Tracks the last route the rule was applied for; [`sync`](Self::sync)
/// with the same inputs is a no-op, so callers may invoke it after every
/// render commit without double-scrolling.
#[derive(Debug, Default)]
pub struct PostLoadNavigator {
    applied: Option<RouteState>,
}

impl PostLoadNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the scroll rule for the current route if it has not been
    /// applied yet.
    ///
    /// Does nothing while `loaded` is false. With an anchor, scrolls its
    /// element into view (a missing element is a no-op); without one,
    /// scrolls to the document origin.
    pub fn sync(&mut self, loaded: bool, route: &RouteState, scroll: &dyn ScrollService) {
        if !loaded || self.applied.as_ref() == Some(route) {
            return;
        }

        match route.hash.as_deref() {
            Some(hash) => {
                let found = scroll.scroll_into_view(hash);
                tracing::debug!(path = %route.path, hash, found, "applied anchor scroll");
            }
            None => {
                scroll.scroll_to(0, 0);
                tracing::debug!(path = %route.path, "applied scroll to top");
            }
        }

        self.applied = Some(route.clone());
    }
}
