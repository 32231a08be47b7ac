//! The markup tree walker (markup → document model)
//!
//! This is the heart of the converter: a recursive walk over the parsed
//! [`MarkupNode`] tree that threads the "current paragraph" (an optional
//! [`ParagraphHandle`]) down every call. Block tags open a new container
//! and recurse with it; inline tags contribute to whatever container is
//! already open. Inline content with no open container is dropped: that
//! is documented policy, asserted by tests, not an error path.
//!
//! Tag dispatch is a closed mapping ([`classify`]); anything outside the
//! set is transparent, so unknown wrapper tags never hide their contents.

use crate::docx::styles::{STYLE_CODE_BLOCK, STYLE_HYPERLINK, STYLE_QUOTE};
use crate::docx::{DocxDocument, ParagraphHandle, RunFormat};
use crate::markup::{Element, MarkupNode};
use crate::sanitize::sanitize;

/// Role a tag plays during translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagRole {
    Heading(u8),
    Paragraph,
    Quote,
    CodeBlock,
    Bold,
    Italic,
    Underline,
    LineBreak,
    Link,
    BulletList,
    NumberedList,
    Table,
    /// Not part of the recognized set: descend with the current context.
    Transparent,
}

/// Map a (parser-lowercased) tag name onto its role. Closed set; the
/// fallback is pass-through, never an error.
pub fn classify(tag: &str) -> TagRole {
    match tag {
        "h1" => TagRole::Heading(1),
        "h2" => TagRole::Heading(2),
        "h3" => TagRole::Heading(3),
        "h4" => TagRole::Heading(4),
        "h5" => TagRole::Heading(5),
        "h6" => TagRole::Heading(6),
        "p" => TagRole::Paragraph,
        "blockquote" => TagRole::Quote,
        "pre" => TagRole::CodeBlock,
        "b" | "strong" => TagRole::Bold,
        "i" | "em" => TagRole::Italic,
        "u" => TagRole::Underline,
        "br" => TagRole::LineBreak,
        "a" => TagRole::Link,
        "ul" => TagRole::BulletList,
        "ol" => TagRole::NumberedList,
        "table" => TagRole::Table,
        _ => TagRole::Transparent,
    }
}

/// Translate a parsed markup tree into builder calls on `doc`.
pub fn translate(root: &MarkupNode, doc: &mut DocxDocument) {
    walk(root, None, doc);
}

/// One step of the recursive walk. `ctx` is the currently open paragraph,
/// if any; it is only ever replaced by a child call, never mutated here.
pub fn walk(node: &MarkupNode, ctx: Option<ParagraphHandle>, doc: &mut DocxDocument) {
    match node {
        MarkupNode::Text(raw) => append_text(raw, ctx, doc),
        MarkupNode::Element(el) => walk_element(el, ctx, doc),
    }
}

fn walk_element(el: &Element, ctx: Option<ParagraphHandle>, doc: &mut DocxDocument) {
    for child in &el.children {
        match child {
            MarkupNode::Text(raw) => append_text(raw, ctx, doc),
            MarkupNode::Element(inner) => dispatch(inner, ctx, doc),
        }
    }
}

fn append_text(raw: &str, ctx: Option<ParagraphHandle>, doc: &mut DocxDocument) {
    let Some(paragraph) = ctx else {
        return; // No open container: dropped by policy.
    };
    let text = sanitize(raw);
    if !text.is_empty() {
        doc.append_run(paragraph, &text, RunFormat::default());
    }
}

fn dispatch(el: &Element, ctx: Option<ParagraphHandle>, doc: &mut DocxDocument) {
    match classify(&el.tag) {
        TagRole::Heading(level) => {
            let paragraph = doc.add_heading(level);
            walk_element(el, Some(paragraph), doc);
        }
        TagRole::Paragraph => {
            let paragraph = doc.add_paragraph();
            walk_element(el, Some(paragraph), doc);
        }
        TagRole::Quote => {
            let paragraph = doc.add_styled_paragraph(STYLE_QUOTE);
            walk_element(el, Some(paragraph), doc);
        }
        TagRole::CodeBlock => {
            let paragraph = doc.add_styled_paragraph(STYLE_CODE_BLOCK);
            walk_element(el, Some(paragraph), doc);
        }
        TagRole::Bold => append_flattened(el, ctx, doc, flag_format(true, false, false)),
        TagRole::Italic => append_flattened(el, ctx, doc, flag_format(false, true, false)),
        TagRole::Underline => append_flattened(el, ctx, doc, flag_format(false, false, true)),
        TagRole::LineBreak => {
            if let Some(paragraph) = ctx {
                doc.append_break(paragraph);
            }
        }
        TagRole::Link => {
            // The target is not persisted: link text is styled, not
            // clickable. A link without href degrades to plain text.
            let format = if el.attr("href").is_some() {
                RunFormat {
                    style: Some(STYLE_HYPERLINK.to_string()),
                    ..Default::default()
                }
            } else {
                RunFormat::default()
            };
            append_flattened(el, ctx, doc, format);
        }
        TagRole::BulletList => {
            for item in el.child_elements("li") {
                let paragraph = doc.add_paragraph();
                let text = format!("\u{2022} {}", sanitize(&item.flattened_text()));
                doc.append_run(paragraph, &text, RunFormat::default());
            }
        }
        TagRole::NumberedList => {
            for (index, item) in el.child_elements("li").into_iter().enumerate() {
                let paragraph = doc.add_paragraph();
                let text = format!("{}. {}", index + 1, sanitize(&item.flattened_text()));
                doc.append_run(paragraph, &text, RunFormat::default());
            }
        }
        TagRole::Table => build_table(el, doc),
        TagRole::Transparent => walk_element(el, ctx, doc),
    }
}

fn flag_format(bold: bool, italic: bool, underline: bool) -> RunFormat {
    RunFormat {
        bold,
        italic,
        underline,
        style: None,
    }
}

/// Inline formatting tags are leaves: one run carries the element's whole
/// flattened text, regardless of nested structure.
fn append_flattened(
    el: &Element,
    ctx: Option<ParagraphHandle>,
    doc: &mut DocxDocument,
    format: RunFormat,
) {
    let Some(paragraph) = ctx else {
        return;
    };
    let text = sanitize(&el.flattened_text());
    if !text.is_empty() {
        doc.append_run(paragraph, &text, format);
    }
}

/// Cells of a table row: data cells if the row has any, header cells
/// otherwise. A row never contributes both.
fn row_cells(row: &Element) -> Vec<&Element> {
    let data = row.descendants("td");
    if data.is_empty() {
        row.descendants("th")
    } else {
        data
    }
}

fn build_table(el: &Element, doc: &mut DocxDocument) {
    let table = doc.add_table();

    for (index, row) in el.descendants("tr").into_iter().enumerate() {
        let cells = row_cells(row);

        // The first row establishes the column capacity and emits no data
        // row; every later row is clipped to that capacity.
        if index == 0 {
            for _ in &cells {
                doc.add_column(table);
            }
            continue;
        }

        let target_row = doc.add_row(table);
        for (col, cell) in cells.iter().enumerate() {
            let text = sanitize(&cell.flattened_text());
            if !doc.set_cell_text(table, target_row, col, &text) {
                log::warn!(
                    "table row {row}: source cell {cell} exceeds column capacity, dropped",
                    row = index + 1,
                    cell = col + 1
                );
            }
        }
    }
}
