//! Resolved-content rendering.
//!
//! Turns a [`Content`] value into the nodes the composer embeds as the
//! page body. Structured content gets one shallow rewrite pass: every
//! immediate `pre` element child is handed to the collaborator's
//! preformatted renderer, everything else passes through in order.

use dv_html::{Element, Node};

use crate::compose::SectionRenderers;
use crate::content::{Content, PLACEHOLDER, RenderProps};

/// Render resolved content.
///
/// - Pending content renders the placeholder string as escaped text.
/// - Text content is inserted as trusted markup; the producer sanitized it
///   upstream, this is the trust boundary, not a validation step.
/// - Structured content is invoked with empty render props; its immediate
///   children are walked once, substituting the preformatted renderer for
///   `pre` elements. Non-element children (text, trusted markup, empty)
///   pass through untouched.
pub fn content_render(content: &Content, renderers: &dyn SectionRenderers) -> Vec<Node> {
    match content {
        Content::Pending => vec![
            Element::new("div")
                .class("placeholder")
                .child(Node::text(PLACEHOLDER))
                .into_node(),
        ],
        Content::Text(html) => vec![
            Element::new("div").child(Node::trusted_html(html)).into_node(),
        ],
        Content::Structured(render) => {
            let rendered = render.render(&RenderProps);
            let children = match rendered {
                Node::Element(el) => el.children,
                other => vec![other],
            };

            children
                .into_iter()
                .map(|child| match child {
                    Node::Element(el) if el.tag == "pre" => renderers.pre(el.children),
                    other => other,
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use crate::compose::HtmlRenderers;

    use super::*;

    fn structured(root: Element) -> Content {
        Content::Structured(Arc::new(move |_props: &RenderProps| root.clone().into_node()))
    }

    fn to_html(nodes: &[Node]) -> String {
        let mut out = String::new();
        for node in nodes {
            node.write_html(&mut out);
        }
        out
    }

    #[test]
    fn test_pending_renders_placeholder() {
        let nodes = content_render(&Content::Pending, &HtmlRenderers);
        assert_eq!(
            to_html(&nodes),
            format!(r#"<div class="placeholder">{PLACEHOLDER}</div>"#)
        );
    }

    #[test]
    fn test_text_is_trusted_markup() {
        let content = Content::Text("<p>already <em>html</em></p>".to_owned());
        let nodes = content_render(&content, &HtmlRenderers);
        assert_eq!(to_html(&nodes), "<div><p>already <em>html</em></p></div>");
    }

    #[test]
    fn test_structured_substitutes_pre_blocks() {
        let root = Element::new("article")
            .child(Element::new("p").child(Node::text("intro")).into_node())
            .child(
                Element::new("pre")
                    .child(Node::text("npm install"))
                    .into_node(),
            )
            .child(Element::new("p").child(Node::text("outro")).into_node());

        let nodes = content_render(&structured(root), &HtmlRenderers);

        // Sibling order preserved; only the pre child is rewritten.
        assert_eq!(
            to_html(&nodes),
            concat!(
                "<p>intro</p>",
                r#"<pre class="code-block">npm install</pre>"#,
                "<p>outro</p>",
            )
        );
    }

    #[test]
    fn test_structured_tolerates_non_element_children() {
        let root = Element::new("article")
            .child(Node::text("bare text"))
            .child(Node::Empty)
            .child(Node::trusted_html("<!-- raw -->"))
            .child(Element::new("pre").child(Node::text("code")).into_node());

        let nodes = content_render(&structured(root), &HtmlRenderers);

        assert_eq!(nodes.len(), 4);
        assert_eq!(
            to_html(&nodes),
            r#"bare text<!-- raw --><pre class="code-block">code</pre>"#
        );
    }

    #[test]
    fn test_structured_traversal_is_shallow() {
        // A pre nested below the immediate children is left alone.
        let root = Element::new("article").child(
            Element::new("div")
                .child(Element::new("pre").child(Node::text("nested")).into_node())
                .into_node(),
        );

        let nodes = content_render(&structured(root), &HtmlRenderers);

        assert_eq!(to_html(&nodes), "<div><pre>nested</pre></div>");
    }

    #[test]
    fn test_structured_non_element_root_is_single_child() {
        let content = Content::Structured(Arc::new(|_props: &RenderProps| Node::text("just text")));

        let nodes = content_render(&content, &HtmlRenderers);
        assert_eq!(to_html(&nodes), "just text");
    }
}
