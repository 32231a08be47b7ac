//! List translation tests: items become prefixed plain paragraphs.

use docport::convert_str;
use docport::docx::{Block, DocxDocument};

fn paragraph_texts(doc: &DocxDocument) -> Vec<String> {
    doc.blocks()
        .iter()
        .filter_map(|block| match block {
            Block::Paragraph(p) => Some(p.text()),
            Block::Table(_) => None,
        })
        .collect()
}

#[test]
fn ordered_list_numbers_items_in_document_order() {
    let doc = convert_str("<ol><li>A</li><li>B</li></ol>").unwrap();
    assert_eq!(paragraph_texts(&doc), vec!["1. A", "2. B"]);
}

#[test]
fn unordered_list_prefixes_a_bullet_glyph() {
    let doc = convert_str("<ul><li>first</li><li>second</li></ul>").unwrap();
    assert_eq!(
        paragraph_texts(&doc),
        vec!["\u{2022} first", "\u{2022} second"]
    );
}

#[test]
fn each_ordered_list_restarts_at_one() {
    let doc = convert_str("<ol><li>A</li></ol><ol><li>B</li></ol>").unwrap();
    assert_eq!(paragraph_texts(&doc), vec!["1. A", "1. B"]);
}

#[test]
fn item_markup_is_flattened_to_text() {
    let doc = convert_str("<ul><li>plain <b>bold</b> tail</li></ul>").unwrap();
    assert_eq!(paragraph_texts(&doc), vec!["\u{2022} plain bold tail"]);

    // The item paragraph carries a single unformatted run.
    match &doc.blocks()[0] {
        Block::Paragraph(p) => {
            let runs: Vec<_> = p.runs().collect();
            assert_eq!(runs.len(), 1);
            assert!(!runs[0].format.bold);
        }
        other => panic!("expected paragraph, got {other:?}"),
    }
}

#[test]
fn list_items_use_plain_paragraphs() {
    let doc = convert_str("<ul><li>entry</li></ul>").unwrap();
    match &doc.blocks()[0] {
        Block::Paragraph(p) => assert_eq!(p.style, None),
        other => panic!("expected paragraph, got {other:?}"),
    }
}

#[test]
fn empty_list_contributes_nothing() {
    let doc = convert_str("<ul></ul>").unwrap();
    assert!(doc.blocks().is_empty());
}
