//! HTML node tree for page composition.
//!
//! This crate provides:
//! - [`Node`] and [`Element`]: a small renderable tree with builder methods
//! - [`Node::trusted_html`]: the explicit trust boundary for pre-sanitized markup
//! - [`escape_html`]: entity escaping for text and attribute values
//!
//! The tree is deliberately shallow in features: no styling, no event
//! handling, no diffing. Composers build a tree, transformers walk its
//! children, and [`Node::to_html`] serializes it.
//!
//! # Example
//!
//! ```
//! use dv_html::{Element, Node};
//!
//! let node = Element::new("p")
//!     .class("note")
//!     .child(Node::text("a < b"))
//!     .into_node();
//! assert_eq!(node.to_html(), r#"<p class="note">a &lt; b</p>"#);
//! ```

mod escape;
mod node;

pub use escape::escape_html;
pub use node::{Element, Node};
