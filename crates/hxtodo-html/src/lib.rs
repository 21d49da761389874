//! hxtodo-html: a small tag-tree model and HTML serializer.
//!
//! Views build a [`Node`] tree out of [`Element`]s, text, and fragments and
//! hand it to [`render`]. There is no diffing and no caching: a tree is
//! serialized to one `String` and thrown away.
//!
//! # Example
//!
//! ```
//! use hxtodo_html::{render, Element, Node};
//!
//! let node: Node = Element::new("p").class("lead").text("1 < 2").into();
//! assert_eq!(render(&node), r#"<p class="lead">1 &lt; 2</p>"#);
//! ```

mod escape;
mod node;
mod render;

pub use escape::{escape_attr, escape_text};
pub use node::{raw, text, Element, Node};
pub use render::{render, render_into, VOID_TAGS};
