//! Page view facade.

use std::sync::Arc;

use dv_html::Node;

use crate::compose::{SectionRenderers, compose_page};
use crate::content::{ContentFuture, ContentSource, ContentState};
use crate::navigator::{PostLoadNavigator, RouteState, ScrollService};
use crate::props::PageProps;

/// A single documentation page view.
///
/// Wires the content resolver, post-load navigator, and section composer
/// for one set of [`PageProps`]. The embedding application drives it:
/// await [`load`](Self::load) when content is deferred, call
/// [`handle_route`](Self::handle_route) after each render commit, and
/// [`render`](Self::render) whenever output is needed.
///
/// Dropping the view before deferred content settles also drops the
/// loader future, so a late settlement can never write into a torn-down
/// view.
pub struct PageView {
    props: PageProps,
    state: ContentState,
    pending: Option<ContentFuture>,
    navigator: PostLoadNavigator,
    scroll: Arc<dyn ScrollService>,
}

impl PageView {
    /// Create a view, resolving ready content immediately.
    pub fn new(props: PageProps, content: ContentSource, scroll: Arc<dyn ScrollService>) -> Self {
        let (state, pending) = ContentState::from_source(content);
        Self {
            props,
            state,
            pending,
            navigator: PostLoadNavigator::new(),
            scroll,
        }
    }

    /// Input record this view renders.
    #[must_use]
    pub fn props(&self) -> &PageProps {
        &self.props
    }

    /// Current content state.
    #[must_use]
    pub fn state(&self) -> &ContentState {
        &self.state
    }

    /// True once content has settled (including the error fallback).
    #[must_use]
    pub fn loaded(&self) -> bool {
        self.state.loaded()
    }

    /// Await deferred content and settle the state.
    ///
    /// Settles at most once: ready content and repeated calls return
    /// immediately. A loader failure settles into the fixed error text.
    pub async fn load(&mut self) {
        if let Some(fut) = self.pending.take() {
            self.state.settle(fut.await);
        }
    }

    /// React to the current route by applying the post-load scroll rule.
    ///
    /// Call after each render commit. Does nothing while content is
    /// pending, and at most once per distinct route afterwards.
    pub fn handle_route(&mut self, route: &RouteState) {
        self.navigator.sync(self.state.loaded(), route, self.scroll.as_ref());
    }

    /// Compose the page output tree.
    #[must_use]
    pub fn render(&self, renderers: &dyn SectionRenderers) -> Node {
        compose_page(&self.props, &self.state, renderers)
    }
}
