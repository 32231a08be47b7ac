//! Markup parsing (raw bytes → decoded text → MarkupNode tree)
//!
//! # Library Choice
//!
//! Parsing uses `html5ever` + `markup5ever_rcdom`: a browser-grade HTML5
//! parser that recovers from malformed input instead of failing, which
//! matters here because the inputs are fragments saved by hand, often with
//! a `.txt` extension. The DOM it produces is converted to the crate's own
//! [`MarkupNode`] tree right away; nothing downstream touches `RcDom`.
//!
//! Decoding uses `encoding_rs`. The default policy detects per file: a BOM
//! wins, then strict UTF-8, then windows-1252 (which cannot fail). A fixed
//! encoding can be configured instead; under a fixed label, malformed
//! sequences fail the file.

use crate::error::ConvertError;
use crate::markup::{Element, MarkupNode};
use encoding_rs::{Encoding, WINDOWS_1252};
use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use std::collections::HashMap;

/// Tag used for the synthetic root node wrapping the parsed document.
pub const DOCUMENT_TAG: &str = "#document";

/// How input bytes are turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodingPolicy {
    /// BOM if present, strict UTF-8 otherwise, windows-1252 as a last resort.
    #[default]
    Auto,
    /// A fixed encoding; malformed sequences fail the file.
    Fixed(&'static Encoding),
}

impl EncodingPolicy {
    /// Resolve a configuration value: `"auto"` or any WHATWG encoding label.
    pub fn from_label(label: &str) -> Option<Self> {
        if label.eq_ignore_ascii_case("auto") {
            return Some(EncodingPolicy::Auto);
        }
        Encoding::for_label(label.as_bytes()).map(EncodingPolicy::Fixed)
    }
}

/// Decode raw file bytes according to the policy.
pub fn decode(bytes: &[u8], policy: EncodingPolicy) -> Result<String, ConvertError> {
    match policy {
        EncodingPolicy::Auto => {
            if let Some((encoding, _)) = Encoding::for_bom(bytes) {
                let (text, _, had_errors) = encoding.decode(bytes);
                if had_errors {
                    return Err(ConvertError::Decode(format!(
                        "{} stream contains malformed sequences",
                        encoding.name()
                    )));
                }
                return Ok(text.into_owned());
            }
            match std::str::from_utf8(bytes) {
                Ok(text) => Ok(text.to_owned()),
                Err(_) => {
                    let (text, _, _) = WINDOWS_1252.decode(bytes);
                    Ok(text.into_owned())
                }
            }
        }
        EncodingPolicy::Fixed(encoding) => {
            let (text, _, had_errors) = encoding.decode(bytes);
            if had_errors {
                return Err(ConvertError::Decode(format!(
                    "input is not valid {}",
                    encoding.name()
                )));
            }
            Ok(text.into_owned())
        }
    }
}

/// Parse markup text into a [`MarkupNode`] tree.
///
/// html5ever normalizes fragments into a full `html`/`head`/`body`
/// skeleton; the translator treats those wrappers as transparent, so the
/// synthetic structure is harmless.
pub fn parse_markup(source: &str) -> MarkupNode {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: true,
            ..Default::default()
        },
        ..Default::default()
    };
    let dom = parse_document(RcDom::default(), opts).one(source);
    from_handle(&dom.document)
        .unwrap_or_else(|| MarkupNode::Element(Element::new(DOCUMENT_TAG, vec![])))
}

/// Decode and parse in one step.
pub fn parse_bytes(bytes: &[u8], policy: EncodingPolicy) -> Result<MarkupNode, ConvertError> {
    let source = decode(bytes, policy)?;
    Ok(parse_markup(&source))
}

fn from_handle(handle: &Handle) -> Option<MarkupNode> {
    match &handle.data {
        NodeData::Document => Some(MarkupNode::Element(Element {
            tag: DOCUMENT_TAG.to_string(),
            attrs: HashMap::new(),
            children: children_of(handle),
        })),
        NodeData::Text { contents } => Some(MarkupNode::Text(contents.borrow().to_string())),
        NodeData::Element { name, attrs, .. } => {
            let mut attr_map = HashMap::new();
            for attr in attrs.borrow().iter() {
                attr_map.insert(attr.name.local.to_string(), attr.value.to_string());
            }
            Some(MarkupNode::Element(Element {
                tag: name.local.to_string(),
                attrs: attr_map,
                children: children_of(handle),
            }))
        }
        // Comments, doctypes and processing instructions carry no content.
        _ => None,
    }
}

fn children_of(handle: &Handle) -> Vec<MarkupNode> {
    handle
        .children
        .borrow()
        .iter()
        .filter_map(from_handle)
        .collect()
}
