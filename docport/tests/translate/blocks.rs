//! End-to-end tests for block and inline translation (markup text in,
//! document model out).

use docport::convert_str;
use docport::docx::{Block, DocxDocument, Paragraph};

fn paragraphs(doc: &DocxDocument) -> Vec<&Paragraph> {
    doc.blocks()
        .iter()
        .filter_map(|block| match block {
            Block::Paragraph(p) => Some(p),
            Block::Table(_) => None,
        })
        .collect()
}

#[test]
fn heading_then_paragraph_with_bold_run() {
    let doc = convert_str("<h1>Title</h1><p>Hello <b>World</b></p>").unwrap();
    let paragraphs = paragraphs(&doc);
    assert_eq!(paragraphs.len(), 2);

    let heading = paragraphs[0];
    assert_eq!(heading.style.as_deref(), Some("Title"));
    assert_eq!(heading.text(), "Title");

    let body = paragraphs[1];
    assert_eq!(body.style, None);
    let runs: Vec<_> = body.runs().collect();
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].text, "Hello ");
    assert!(!runs[0].format.bold);
    assert_eq!(runs[1].text, "World");
    assert!(runs[1].format.bold);
    assert_eq!(body.text(), "Hello World");
}

#[test]
fn heading_levels_map_to_registered_styles() {
    let doc = convert_str("<h2>Two</h2><h3>Three</h3><h6>Six</h6>").unwrap();
    let paragraphs = paragraphs(&doc);

    assert_eq!(paragraphs[0].style.as_deref(), Some("Heading2"));
    assert_eq!(paragraphs[1].style.as_deref(), Some("Heading3"));
    assert_eq!(paragraphs[2].style.as_deref(), Some("Heading6"));
}

#[test]
fn input_without_blocks_produces_an_empty_document() {
    // No heading or paragraph ever opens a container, so the inline
    // content has nowhere to go and is dropped by policy.
    let doc = convert_str("<div>loose <b>bold</b> text</div>").unwrap();
    assert!(doc.blocks().is_empty());
}

#[test]
fn plain_text_outside_any_tag_is_dropped() {
    let doc = convert_str("just some words").unwrap();
    assert!(doc.blocks().is_empty());
}

#[test]
fn line_break_stays_inside_the_paragraph() {
    let doc = convert_str("<p>one<br>two</p>").unwrap();
    let paragraphs = paragraphs(&doc);
    assert_eq!(paragraphs.len(), 1);

    use docport::docx::RunContent;
    let children = &paragraphs[0].children;
    assert_eq!(children.len(), 3);
    assert!(matches!(children[1], RunContent::Break));
    assert_eq!(paragraphs[0].text(), "onetwo");
}

#[test]
fn italic_and_underline_set_their_flags() {
    let doc = convert_str("<p><em>lean</em><u>under</u></p>").unwrap();
    let runs: Vec<_> = paragraphs(&doc)[0].runs().cloned().collect();

    assert!(runs[0].format.italic);
    assert!(!runs[0].format.underline);
    assert!(runs[1].format.underline);
    assert!(!runs[1].format.italic);
}

#[test]
fn link_text_gets_the_hyperlink_style() {
    let doc = convert_str(r#"<p>See <a href="https://example.com">the docs</a>.</p>"#).unwrap();
    let body = paragraphs(&doc)[0];
    let runs: Vec<_> = body.runs().collect();

    assert_eq!(runs[1].text, "the docs");
    assert_eq!(runs[1].format.style.as_deref(), Some("Hyperlink"));
    // The target is intentionally not persisted anywhere in the model.
    assert_eq!(body.text(), "See the docs.");
}

#[test]
fn link_without_href_is_plain_text() {
    let doc = convert_str("<p><a>dangling</a></p>").unwrap();
    let runs: Vec<_> = paragraphs(&doc)[0].runs().cloned().collect();

    assert_eq!(runs[0].text, "dangling");
    assert_eq!(runs[0].format.style, None);
}

#[test]
fn blockquote_and_pre_use_their_block_styles() {
    let doc = convert_str("<blockquote>wisdom</blockquote><pre>let x = 1;</pre>").unwrap();
    let paragraphs = paragraphs(&doc);

    assert_eq!(paragraphs[0].style.as_deref(), Some("Quote"));
    assert_eq!(paragraphs[0].text(), "wisdom");
    assert_eq!(paragraphs[1].style.as_deref(), Some("CodeBlock"));
    assert_eq!(paragraphs[1].text(), "let x = 1;");
}

#[test]
fn unknown_wrappers_are_transparent() {
    let doc = convert_str("<article><section><p>nested</p></section></article>").unwrap();
    let paragraphs = paragraphs(&doc);

    assert_eq!(paragraphs.len(), 1);
    assert_eq!(paragraphs[0].text(), "nested");
}

#[test]
fn control_characters_are_stripped_from_runs() {
    let doc = convert_str("<p>ab\u{0007}cd</p>").unwrap();
    assert_eq!(paragraphs(&doc)[0].text(), "abcd");
}
