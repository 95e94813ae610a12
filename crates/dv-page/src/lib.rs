//! Documentation page view.
//!
//! This crate provides:
//! - [`PageView`]: content resolution, route reaction, and rendering for
//!   one documentation page
//! - [`ContentSource`]: ready or deferred page content with one
//!   pending-to-loaded transition
//! - [`SectionRenderers`]: the collaborator seam for the supporting
//!   sections, with [`HtmlRenderers`] as a plain-HTML default
//! - [`ScrollService`]: the viewport capability the post-load navigator
//!   drives
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use dv_page::{ContentSource, HtmlRenderers, NoopScroll, PageProps, PageView, RouteState};
//!
//! let props = PageProps::new("Getting Started");
//! let content = ContentSource::ready("<p>Install the package.</p>");
//! let mut view = PageView::new(props, content, Arc::new(NoopScroll));
//!
//! assert!(view.loaded());
//! let html = view.render(&HtmlRenderers).to_html();
//! assert!(html.contains("<h1>Getting Started</h1>"));
//!
//! // After the render commit, apply the post-load scroll rule.
//! view.handle_route(&RouteState::new("/getting-started"));
//! ```

pub(crate) mod compose;
pub(crate) mod content;
pub(crate) mod navigator;
pub(crate) mod props;
pub(crate) mod transform;
pub(crate) mod view;

pub use compose::{HtmlRenderers, SectionRenderers, compose_page};
pub use content::{
    Content, ContentError, ContentFuture, ContentModule, ContentSource, ContentState,
    ContentValue, LOAD_ERROR, PLACEHOLDER, RenderProps, StructuredRender,
};
pub use navigator::{NoopScroll, PostLoadNavigator, RouteState, ScrollService};
pub use props::{Contributor, PageProps, PageRef, RelatedLink, Translator};
pub use transform::content_render;
pub use view::PageView;

// Re-export the node tree so downstream callers don't need a direct
// dv-html dependency for common cases.
pub use dv_html::{Element, Node};
