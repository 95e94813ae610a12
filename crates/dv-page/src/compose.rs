//! Section composition and the collaborator seam.
//!
//! [`compose_page`] is a pure function: it decides *which* sections appear
//! and in what order, while the [`SectionRenderers`] collaborators decide
//! what each supporting section looks like. Credit and related-reading
//! sections only appear once content is loaded, so a half-loaded page never
//! shows trailing blocks above a placeholder body.

use dv_html::{Element, Node};

use crate::content::ContentState;
use crate::props::{Contributor, PageProps, PageRef, Translator};
use crate::transform::content_render;

/// Disclaimer body appended after the page title on third-party pages.
const THIRD_PARTY_DISCLAIMER: &str = "is a third-party package maintained by community \
     members. It may not have the same support, security policy, or license as this \
     project, and it is not maintained here.";

/// Renderers supplied by the embedding application for the page's
/// supporting sections.
///
/// The composer only decides *when* these render; what they produce is the
/// collaborator's business. [`HtmlRenderers`] is a plain-HTML default.
pub trait SectionRenderers {
    /// Layout wrapper around the whole page body.
    fn markdown(&self, children: Vec<Node>) -> Node;

    /// Specialized renderer for preformatted blocks in structured content.
    fn pre(&self, children: Vec<Node>) -> Node;

    /// Render a link with a target and label.
    fn link(&self, to: &str, label: &str) -> Node;

    /// Render the contributor credit list.
    fn contributors(&self, contributors: &[Contributor]) -> Node;

    /// Render the translator credit list.
    fn translators(&self, translators: &[Translator]) -> Node;

    /// Render the page-level link list from the full prop bag.
    fn page_links(&self, page: &PageProps) -> Node;

    /// Render previous/next page navigation.
    fn adjacent_pages(&self, previous: Option<&PageRef>, next: Option<&PageRef>) -> Node;
}

/// Default collaborators producing plain semantic HTML.
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlRenderers;

impl SectionRenderers for HtmlRenderers {
    fn markdown(&self, children: Vec<Node>) -> Node {
        Element::new("div").class("markdown").children(children).into_node()
    }

    fn pre(&self, children: Vec<Node>) -> Node {
        Element::new("pre").class("code-block").children(children).into_node()
    }

    fn link(&self, to: &str, label: &str) -> Node {
        Element::new("a")
            .attr("href", to)
            .child(Node::text(label))
            .into_node()
    }

    fn contributors(&self, contributors: &[Contributor]) -> Node {
        let items = contributors.iter().map(|c| {
            Element::new("li").child(Node::text(&c.name)).into_node()
        });
        Element::new("ul").class("contributors").children(items).into_node()
    }

    fn translators(&self, translators: &[Translator]) -> Node {
        let items = translators.iter().map(|t| {
            Element::new("li").child(Node::text(&t.name)).into_node()
        });
        Element::new("ul").class("translators").children(items).into_node()
    }

    fn page_links(&self, page: &PageProps) -> Node {
        let mut nav = Element::new("nav").class("page-links");
        if let Some(edit_url) = page.extra.get("editUrl").and_then(|v| v.as_str()) {
            nav = nav.child(self.link(edit_url, "Edit this page"));
        }
        nav.into_node()
    }

    fn adjacent_pages(&self, previous: Option<&PageRef>, next: Option<&PageRef>) -> Node {
        let mut nav = Element::new("nav").class("adjacent-pages");
        if let Some(prev) = previous {
            nav = nav.child(
                Element::new("a")
                    .class("previous")
                    .attr("href", &prev.path)
                    .child(Node::text(&prev.title))
                    .into_node(),
            );
        }
        if let Some(next) = next {
            nav = nav.child(
                Element::new("a")
                    .class("next")
                    .attr("href", &next.path)
                    .child(Node::text(&next.title))
                    .into_node(),
            );
        }
        nav.into_node()
    }
}

/// Compose the full page section.
///
/// Pure function of its inputs: identical inputs produce a structurally
/// identical tree. Section gates:
/// - third-party banner: `thirdParty` flag, regardless of load state
/// - Further Reading: loaded and `related` non-empty
/// - adjacent navigation: previous or next present, regardless of load state
/// - contributor/translator credits: loaded and the list non-empty
pub fn compose_page(
    props: &PageProps,
    state: &ContentState,
    renderers: &dyn SectionRenderers,
) -> Node {
    let loaded = state.loaded();
    let mut body: Vec<Node> = Vec::new();

    body.push(Element::new("h1").child(Node::text(&props.title)).into_node());

    if props.third_party() {
        body.push(
            Element::new("div")
                .class("disclaimer")
                .child(
                    Element::new("strong")
                        .child(Node::text("Disclaimer:"))
                        .into_node(),
                )
                .child(Node::text(format!(
                    " {} {THIRD_PARTY_DISCLAIMER}",
                    props.title
                )))
                .into_node(),
        );
    }

    body.extend(content_render(state.content(), renderers));

    if loaded && !props.related.is_empty() {
        let items = props.related.iter().map(|link| {
            Element::new("li")
                .child(renderers.link(&link.url, &link.title))
                .into_node()
        });
        body.push(
            Element::new("div")
                .class("related")
                .child(
                    Element::new("h2")
                        .child(Node::text("Further Reading"))
                        .into_node(),
                )
                .child(Element::new("ul").children(items).into_node())
                .into_node(),
        );
    }

    body.push(renderers.page_links(props));

    if props.previous.is_some() || props.next.is_some() {
        body.push(renderers.adjacent_pages(props.previous.as_ref(), props.next.as_ref()));
    }

    if loaded && !props.contributors.is_empty() {
        let count = props.contributors.len();
        let noun = if count == 1 { "Contributor" } else { "Contributors" };
        body.push(
            Element::new("div")
                .class("contributors-section")
                .child(
                    Element::new("h2")
                        .child(Node::text(format!("{count} {noun}")))
                        .into_node(),
                )
                .child(renderers.contributors(&props.contributors))
                .into_node(),
        );
    }

    if loaded && !props.translators.is_empty() {
        body.push(
            Element::new("div")
                .class("translators-section")
                .child(Element::new("hr").into_node())
                .child(Element::new("h3").child(Node::text("Translators")).into_node())
                .child(renderers.translators(&props.translators))
                .into_node(),
        );
    }

    Element::new("section")
        .class("page")
        .child(renderers.markdown(body))
        .into_node()
}
