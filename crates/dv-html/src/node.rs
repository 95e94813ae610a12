//! Renderable node tree.

use std::fmt::Write;

use crate::escape::escape_html;

/// Elements that never carry children and close without an end tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// A renderable node.
///
/// Text is escaped when serialized; trusted HTML is emitted verbatim and
/// must only be constructed from markup that was sanitized upstream.
/// [`Node::Empty`] renders to nothing and lets tree walkers tolerate
/// absent children without special casing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    /// An element with tag, attributes, and children.
    Element(Element),
    /// Plain text, escaped on serialization.
    Text(String),
    /// Pre-sanitized markup, emitted verbatim.
    TrustedHtml(String),
    /// Nothing. Renders to the empty string.
    Empty,
}

impl Node {
    /// Create a text node. Escaped when serialized.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Create a raw-markup node.
    ///
    /// This is the trust boundary: the caller asserts the markup was
    /// sanitized upstream. It is emitted without escaping.
    pub fn trusted_html(html: impl Into<String>) -> Self {
        Self::TrustedHtml(html.into())
    }

    /// Serialize the tree to an HTML string.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Serialize the tree into an existing buffer.
    pub fn write_html(&self, out: &mut String) {
        match self {
            Self::Element(el) => el.write_html(out),
            Self::Text(text) => out.push_str(&escape_html(text)),
            Self::TrustedHtml(html) => out.push_str(html),
            Self::Empty => {}
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

/// An HTML element.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    /// Tag name (e.g. `"div"`, `"pre"`).
    pub tag: String,
    /// Attribute name/value pairs in insertion order.
    pub attrs: Vec<(String, String)>,
    /// Child nodes in document order.
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute. Values are escaped on serialization.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Add a `class` attribute.
    #[must_use]
    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    /// Append a child node.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append child nodes in order.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Wrap this element in a [`Node`].
    #[must_use]
    pub fn into_node(self) -> Node {
        Node::Element(self)
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            write!(out, r#" {}="{}""#, name, escape_html(value)).unwrap();
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return;
        }

        for child in &self.children {
            child.write_html(out);
        }
        write!(out, "</{}>", self.tag).unwrap();
    }
}
