//! Generic markup tree for vector-image output.
//!
//! A [`MarkupNode`] is one element of the output tree: a tag name, an
//! insertion-ordered attribute map, owned children and a flag choosing
//! between a self-closing (`<rect ... />`) and a wrapping
//! (`<g>...</g>`) form. Children are owned by value, so the tree is
//! acyclic by construction.

use std::fmt::Write;

use indexmap::IndexMap;

/// A child of a markup node: either a nested node or raw text.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Node(MarkupNode),
    /// Raw text, emitted verbatim. Markup-special characters are NOT
    /// escaped; callers relying on this to embed pre-formatted
    /// fragments are part of the documented contract.
    Text(String),
}

/// One element of the output vector-image tree.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupNode {
    pub tag: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Child>,
    pub self_closing: bool,
}

impl MarkupNode {
    /// Create a new node with the given tag, attributes and closing style.
    pub fn new(
        tag: impl Into<String>,
        attributes: IndexMap<String, String>,
        self_closing: bool,
    ) -> Self {
        MarkupNode {
            tag: tag.into(),
            attributes,
            children: Vec::new(),
            self_closing,
        }
    }

    /// Create an empty wrapping element (`<tag>...</tag>`).
    pub fn element(tag: impl Into<String>) -> Self {
        MarkupNode::new(tag, IndexMap::new(), false)
    }

    /// Create an empty self-closing element (`<tag />`).
    pub fn leaf(tag: impl Into<String>) -> Self {
        MarkupNode::new(tag, IndexMap::new(), true)
    }

    /// Set an attribute, replacing any previous value for the key.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Set an attribute in place.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Append a child node. The child is moved into the parent, so the
    /// tree cannot contain a node twice (and in particular a node can
    /// never become its own descendant).
    pub fn push_child(&mut self, child: MarkupNode) {
        self.children.push(Child::Node(child));
    }

    /// Append a raw text child (emitted verbatim, unescaped).
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.children.push(Child::Text(text.into()));
    }

    /// Builder form of [`push_child`](Self::push_child).
    pub fn child(mut self, child: MarkupNode) -> Self {
        self.push_child(child);
        self
    }

    /// Builder form of [`push_text`](Self::push_text).
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.push_text(text);
        self
    }

    /// Serialize this node and its subtree to markup text.
    ///
    /// Depth-first, pre-order. A self-closing node does not descend
    /// into its children: any that are present are simply not emitted.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out);
        out
    }

    fn write_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (key, value) in &self.attributes {
            // Infallible for String targets.
            let _ = write!(out, " {}=\"{}\"", key, value);
        }

        if self.self_closing {
            out.push_str(" />");
            return;
        }

        out.push('>');
        for child in &self.children {
            match child {
                Child::Node(node) => node.write_into(out),
                Child::Text(text) => out.push_str(text),
            }
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_closing_with_attributes() {
        let node = MarkupNode::leaf("rect").attr("x", "0").attr("y", "0");
        assert_eq!(node.serialize(), "<rect x=\"0\" y=\"0\" />");
    }

    #[test]
    fn test_attribute_insertion_order_is_stable() {
        let node = MarkupNode::leaf("rect")
            .attr("width", "10")
            .attr("x", "0")
            .attr("width", "20");
        // Re-setting a key overrides the value but keeps its slot.
        assert_eq!(node.serialize(), "<rect width=\"20\" x=\"0\" />");
    }

    #[test]
    fn test_wrapping_node_with_children() {
        let node = MarkupNode::element("g")
            .attr("id", "layer")
            .child(MarkupNode::leaf("circle").attr("r", "3"))
            .child(MarkupNode::leaf("circle").attr("r", "4"));
        assert_eq!(
            node.serialize(),
            "<g id=\"layer\"><circle r=\"3\" /><circle r=\"4\" /></g>"
        );
    }

    #[test]
    fn test_text_child_is_verbatim() {
        // Raw passthrough: no escaping of markup-special characters.
        let node = MarkupNode::element("text").text("a < b & c");
        assert_eq!(node.serialize(), "<text>a < b & c</text>");
    }

    #[test]
    fn test_self_closing_node_does_not_emit_children() {
        let node = MarkupNode::leaf("rect").child(MarkupNode::leaf("circle"));
        assert_eq!(node.serialize(), "<rect />");
    }

    #[test]
    fn test_nested_tree() {
        let mut root = MarkupNode::element("svg");
        let mut group = MarkupNode::element("g");
        group.push_child(MarkupNode::leaf("line").attr("x1", "0"));
        root.push_child(group);
        assert_eq!(root.serialize(), "<svg><g><line x1=\"0\" /></g></svg>");
    }
}
