//! The renderable tree.

use std::borrow::Cow;

/// A renderable piece of HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Markup emitted verbatim. The caller vouches that it is well formed.
    Raw(String),
    /// Text content, escaped on render.
    Text(String),
    /// A tag with attributes and children.
    Element(Element),
    /// Sibling nodes rendered one per line.
    Fragment(Vec<Node>),
}

impl Node {
    /// An empty fragment; renders to the empty string.
    pub fn empty() -> Self {
        Node::Fragment(Vec::new())
    }
}

/// Text node, escaped on render.
pub fn text(s: impl Into<String>) -> Node {
    Node::Text(s.into())
}

/// Verbatim markup node.
pub fn raw(s: impl Into<String>) -> Node {
    Node::Raw(s.into())
}

/// An HTML element under construction.
///
/// Attributes keep their insertion order so output is deterministic.
/// Setting the same attribute twice replaces the earlier value in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: Cow<'static, str>,
    attrs: Vec<(Cow<'static, str>, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    #[must_use]
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    #[must_use]
    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Append one child.
    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append every node yielded by `nodes`.
    #[must_use]
    pub fn children<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Append an escaped text child.
    #[must_use]
    pub fn text(self, s: impl Into<String>) -> Self {
        self.child(Node::Text(s.into()))
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Look up an attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(n, v)| (n.as_ref(), v.as_str()))
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Text(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text(s)
    }
}

impl From<Vec<Node>> for Node {
    fn from(nodes: Vec<Node>) -> Self {
        Node::Fragment(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_keep_insertion_order() {
        let el = Element::new("button")
            .attr("hx-post", "/todos/new")
            .attr("hx-target", "#todos")
            .attr("hx-swap", "beforeend");
        let names: Vec<&str> = el.attrs().map(|(n, _)| n).collect();
        assert_eq!(names, ["hx-post", "hx-target", "hx-swap"]);
    }

    #[test]
    fn setting_attribute_twice_replaces_value() {
        let el = Element::new("div").class("a").id("x").class("b");
        assert_eq!(el.get_attr("class"), Some("b"));
        assert_eq!(el.attrs().count(), 2);
    }

    #[test]
    fn strings_convert_to_text_nodes() {
        assert_eq!(Node::from("hi"), Node::Text("hi".into()));
        assert_eq!(Node::from(String::from("hi")), text("hi"));
    }

    #[test]
    fn children_accepts_mixed_iterators() {
        let el = Element::new("ul").children(["a", "b"].map(|s| Element::new("li").text(s)));
        assert_eq!(el.child_nodes().len(), 2);
    }
}
