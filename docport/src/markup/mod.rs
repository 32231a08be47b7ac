//! Core data structures for the parsed markup tree.
//!
//! The parser (see [`parser`]) turns whatever html5ever recovered from the
//! input into this owned tree; the translator only ever sees these nodes,
//! never the DOM types of the parsing library.

pub mod parser;

use std::collections::HashMap;

/// A node in the parsed markup tree.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkupNode {
    Text(String),
    Element(Element),
}

/// An element with a tag name, attributes and ordered children.
///
/// Tag and attribute names come from the parser already lowercased.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attrs: HashMap<String, String>,
    pub children: Vec<MarkupNode>,
}

impl MarkupNode {
    /// Build a text node.
    pub fn text(content: impl Into<String>) -> Self {
        MarkupNode::Text(content.into())
    }

    /// Build an element node with no attributes.
    pub fn element(tag: impl Into<String>, children: Vec<MarkupNode>) -> Self {
        MarkupNode::Element(Element::new(tag, children))
    }
}

impl Element {
    pub fn new(tag: impl Into<String>, children: Vec<MarkupNode>) -> Self {
        Element {
            tag: tag.into(),
            attrs: HashMap::new(),
            children,
        }
    }

    /// Attribute value, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Concatenation of all descendant text nodes, ignoring tag structure.
    pub fn flattened_text(&self) -> String {
        let mut output = String::new();
        collect_text(self, &mut output);
        output
    }

    /// Descendant elements with the given tag, in document order.
    pub fn descendants(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        collect_descendants(self, tag, &mut found);
        found
    }

    /// Immediate element children with the given tag.
    pub fn child_elements(&self, tag: &str) -> Vec<&Element> {
        self.children
            .iter()
            .filter_map(|child| match child {
                MarkupNode::Element(el) if el.tag == tag => Some(el),
                _ => None,
            })
            .collect()
    }
}

fn collect_text(el: &Element, output: &mut String) {
    for child in &el.children {
        match child {
            MarkupNode::Text(text) => output.push_str(text),
            MarkupNode::Element(inner) => collect_text(inner, output),
        }
    }
}

fn collect_descendants<'a>(el: &'a Element, tag: &str, found: &mut Vec<&'a Element>) {
    for child in &el.children {
        if let MarkupNode::Element(inner) = child {
            if inner.tag == tag {
                found.push(inner);
            }
            collect_descendants(inner, tag, found);
        }
    }
}
