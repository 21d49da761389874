//! Serialization of a [`Node`] tree to an HTML string.

use std::fmt;

use crate::escape::{escape_attr, escape_text};
use crate::node::{Element, Node};

/// Tags that never have children or a closing tag.
pub const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Render a node to a fresh string.
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    render_into(node, &mut out);
    out
}

/// Render a node, appending to `out`.
pub fn render_into(node: &Node, out: &mut String) {
    match node {
        Node::Raw(s) => out.push_str(s),
        Node::Text(s) => out.push_str(&escape_text(s)),
        Node::Element(el) => render_element(el, out),
        Node::Fragment(nodes) => {
            for (i, n) in nodes.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                render_into(n, out);
            }
        }
    }
}

fn render_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(el.tag());
    for (name, value) in el.attrs() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }
    out.push('>');

    // Children of a void tag have nowhere to go.
    if VOID_TAGS.contains(&el.tag()) {
        return;
    }

    for child in el.child_nodes() {
        render_into(child, out);
    }
    out.push_str("</");
    out.push_str(el.tag());
    out.push('>');
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
