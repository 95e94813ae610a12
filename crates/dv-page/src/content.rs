//! Content model and resolver.
//!
//! Page content arrives either ready (the common, synchronous case) or
//! deferred behind a loader future. The resolver classifies the source
//! without awaiting, and [`ContentState`] tracks the single
//! pending-to-loaded transition. Load failures are recovered locally into
//! the fixed [`LOAD_ERROR`] text; nothing propagates.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use dv_html::Node;
use thiserror::Error;

/// Text rendered while deferred content is still loading.
pub const PLACEHOLDER: &str = "Loading…";

/// Text rendered when deferred content fails to load.
pub const LOAD_ERROR: &str = "Error loading content.";

/// Configuration passed to a structured-content render function.
///
/// Currently empty: render functions are invoked with no configuration,
/// and the type exists so the seam can grow without breaking implementors.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderProps;

/// Structured page content: a render function producing a node tree.
///
/// Implemented for free by closures of the right shape.
pub trait StructuredRender: Send + Sync {
    /// Produce the content's node tree.
    fn render(&self, props: &RenderProps) -> Node;
}

impl<F> StructuredRender for F
where
    F: Fn(&RenderProps) -> Node + Send + Sync,
{
    fn render(&self, props: &RenderProps) -> Node {
        self(props)
    }
}

/// A resolved content value.
#[derive(Clone)]
pub enum ContentValue {
    /// Pre-rendered HTML, trusted as-is.
    Text(String),
    /// A render function for structured content.
    Structured(Arc<dyn StructuredRender>),
}

impl ContentValue {
    /// Wrap a render function.
    pub fn structured(render: impl StructuredRender + 'static) -> Self {
        Self::Structured(Arc::new(render))
    }
}

impl fmt::Debug for ContentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Structured(_) => f.write_str("Structured(..)"),
        }
    }
}

impl From<String> for ContentValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for ContentValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

/// What a content loader yields: a bare value, or a module wrapper whose
/// default export carries the value.
#[derive(Debug)]
pub enum ContentModule {
    /// The value itself.
    Bare(ContentValue),
    /// A module wrapper; the default export is the value.
    Module {
        /// The module's default export.
        default: ContentValue,
    },
}

impl ContentModule {
    /// Unwrap the default export if present, else the value itself.
    #[must_use]
    pub fn into_value(self) -> ContentValue {
        match self {
            Self::Bare(value) | Self::Module { default: value } => value,
        }
    }
}

impl From<ContentValue> for ContentModule {
    fn from(value: ContentValue) -> Self {
        Self::Bare(value)
    }
}

impl From<String> for ContentModule {
    fn from(text: String) -> Self {
        Self::Bare(ContentValue::Text(text))
    }
}

impl From<&str> for ContentModule {
    fn from(text: &str) -> Self {
        Self::Bare(ContentValue::Text(text.to_owned()))
    }
}

/// Content loading failure.
///
/// The only recognized failure mode; the resolver maps it to the fixed
/// [`LOAD_ERROR`] text rather than propagating it.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The loader failed to produce a content module.
    #[error("content load failed: {0}")]
    Load(String),
}

/// Future yielding a content module.
pub type ContentFuture = Pin<Box<dyn Future<Output = Result<ContentModule, ContentError>> + Send>>;

/// Page content input: ready now, or deferred behind a loader.
pub enum ContentSource {
    /// Content available at construction time.
    Ready(ContentModule),
    /// Content still being produced by a loader.
    Deferred(ContentFuture),
}

impl ContentSource {
    /// Wrap an already-available value.
    pub fn ready(module: impl Into<ContentModule>) -> Self {
        Self::Ready(module.into())
    }

    /// Wrap a loader future.
    pub fn deferred<F>(loader: F) -> Self
    where
        F: Future<Output = Result<ContentModule, ContentError>> + Send + 'static,
    {
        Self::Deferred(Box::pin(loader))
    }
}

impl fmt::Debug for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(module) => f.debug_tuple("Ready").field(module).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// Resolved content as seen by the renderer.
#[derive(Clone)]
pub enum Content {
    /// Deferred content that has not settled yet.
    Pending,
    /// Pre-rendered HTML text.
    Text(String),
    /// Structured content render function.
    Structured(Arc<dyn StructuredRender>),
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.write_str("Pending"),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Structured(_) => f.write_str("Structured(..)"),
        }
    }
}

impl From<ContentValue> for Content {
    fn from(value: ContentValue) -> Self {
        match value {
            ContentValue::Text(text) => Self::Text(text),
            ContentValue::Structured(render) => Self::Structured(render),
        }
    }
}

/// Derived view state for page content.
///
/// Invariant: `loaded` is true exactly when `content` is not
/// [`Content::Pending`]. The state settles at most once; after that it
/// never changes for the lifetime of the view.
#[derive(Debug)]
pub struct ContentState {
    content: Content,
    loaded: bool,
}

impl ContentState {
    /// Classify a source without awaiting.
    ///
    /// Ready sources load immediately; deferred sources start pending and
    /// hand their future back to the caller for awaiting.
    pub(crate) fn from_source(source: ContentSource) -> (Self, Option<ContentFuture>) {
        match source {
            ContentSource::Ready(module) => (
                Self {
                    content: module.into_value().into(),
                    loaded: true,
                },
                None,
            ),
            ContentSource::Deferred(fut) => (
                Self {
                    content: Content::Pending,
                    loaded: false,
                },
                Some(fut),
            ),
        }
    }

    /// Current best-known content.
    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// True once content has settled (including the error fallback).
    #[must_use]
    pub fn loaded(&self) -> bool {
        self.loaded
    }

    /// Apply a settled load result.
    ///
    /// Success stores the unwrapped value; failure stores [`LOAD_ERROR`].
    /// Either way the state becomes loaded.
    pub(crate) fn settle(&mut self, result: Result<ContentModule, ContentError>) {
        match result {
            Ok(module) => self.content = module.into_value().into(),
            Err(e) => {
                tracing::warn!(error = %e, "deferred page content failed to load");
                self.content = Content::Text(LOAD_ERROR.to_owned());
            }
        }
        self.loaded = true;
    }
}

#[cfg(test)]
mod tests {
    use dv_html::Element;

    use super::*;

    static_assertions::assert_impl_all!(ContentState: Send, Sync);

    #[test]
    fn test_ready_text_loads_immediately() {
        let (state, fut) = ContentState::from_source(ContentSource::ready("<p>hi</p>"));
        assert!(state.loaded());
        assert!(fut.is_none());
        assert!(matches!(state.content(), Content::Text(t) if t == "<p>hi</p>"));
    }

    #[test]
    fn test_ready_module_unwraps_default_export() {
        let module = ContentModule::Module {
            default: ContentValue::Text("<p>default</p>".to_owned()),
        };
        let (state, _) = ContentState::from_source(ContentSource::Ready(module));
        assert!(matches!(state.content(), Content::Text(t) if t == "<p>default</p>"));
    }

    #[test]
    fn test_ready_structured_value() {
        let value = ContentValue::structured(|_props: &RenderProps| {
            Element::new("article").into_node()
        });
        let (state, _) = ContentState::from_source(ContentSource::Ready(value.into()));
        assert!(state.loaded());
        assert!(matches!(state.content(), Content::Structured(_)));
    }

    #[test]
    fn test_deferred_starts_pending() {
        let source = ContentSource::deferred(async { Ok(ContentModule::from("<p>later</p>")) });
        let (state, fut) = ContentState::from_source(source);
        assert!(!state.loaded());
        assert!(fut.is_some());
        assert!(matches!(state.content(), Content::Pending));
    }

    #[tokio::test]
    async fn test_settle_success_stores_unwrapped_value() {
        let source = ContentSource::deferred(async {
            Ok(ContentModule::Module {
                default: ContentValue::Text("<p>loaded</p>".to_owned()),
            })
        });
        let (mut state, fut) = ContentState::from_source(source);

        state.settle(fut.unwrap().await);

        assert!(state.loaded());
        assert!(matches!(state.content(), Content::Text(t) if t == "<p>loaded</p>"));
    }

    #[tokio::test]
    async fn test_settle_failure_stores_error_text() {
        let source =
            ContentSource::deferred(async { Err(ContentError::Load("boom".to_owned())) });
        let (mut state, fut) = ContentState::from_source(source);

        state.settle(fut.unwrap().await);

        assert!(state.loaded());
        assert!(matches!(state.content(), Content::Text(t) if t == LOAD_ERROR));
    }

    #[test]
    fn test_content_error_display() {
        let e = ContentError::Load("chunk 404".to_owned());
        assert_eq!(e.to_string(), "content load failed: chunk 404");
    }
}
