//! WordprocessingML emission
//!
//! Renders the document model into word/document.xml and the style
//! registry into word/styles.xml. Only the subset of WordprocessingML the
//! builder can produce is emitted; text is escaped here, after sanitization
//! has already removed characters the format cannot carry at all.

use super::styles::{StyleDefinition, StyleKind, StyleRegistry, STYLE_NORMAL};
use super::{Block, DocxDocument, Paragraph, Run, RunContent, Table};

/// Fixed column width, in twips (1.5 inches).
const CELL_WIDTH_TWIPS: u32 = 2160;

/// Escape text for XML content and attribute values.
pub fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render word/document.xml.
pub fn document_xml(doc: &DocxDocument) -> String {
    let mut body = String::new();
    for block in doc.blocks() {
        match block {
            Block::Paragraph(paragraph) => push_paragraph(&mut body, paragraph),
            Block::Table(table) => push_table(&mut body, table),
        }
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"
 xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    {body}
    <w:sectPr>
      <w:pgSz w:w="12240" w:h="15840"/>
      <w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="708" w:footer="708" w:gutter="0"/>
    </w:sectPr>
  </w:body>
</w:document>"#
    )
}

fn push_paragraph(out: &mut String, paragraph: &Paragraph) {
    out.push_str("<w:p>");
    if let Some(style) = &paragraph.style {
        out.push_str(&format!(
            r#"<w:pPr><w:pStyle w:val="{}"/></w:pPr>"#,
            xml_escape(style)
        ));
    }
    for content in &paragraph.children {
        match content {
            RunContent::Break => out.push_str("<w:r><w:br/></w:r>"),
            RunContent::Run(run) => push_run(out, run),
        }
    }
    out.push_str("</w:p>");
}

fn push_run(out: &mut String, run: &Run) {
    if run.text.is_empty() {
        return;
    }
    out.push_str("<w:r>");
    let format = &run.format;
    if format.bold || format.italic || format.underline || format.style.is_some() {
        out.push_str("<w:rPr>");
        if let Some(style) = &format.style {
            out.push_str(&format!(r#"<w:rStyle w:val="{}"/>"#, xml_escape(style)));
        }
        if format.bold {
            out.push_str("<w:b/>");
        }
        if format.italic {
            out.push_str("<w:i/>");
        }
        if format.underline {
            out.push_str(r#"<w:u w:val="single"/>"#);
        }
        out.push_str("</w:rPr>");
    }
    out.push_str(r#"<w:t xml:space="preserve">"#);
    out.push_str(&xml_escape(&run.text));
    out.push_str("</w:t></w:r>");
}

fn push_table(out: &mut String, table: &Table) {
    out.push_str("<w:tbl>");
    out.push_str(concat!(
        r#"<w:tblPr><w:tblW w:w="0" w:type="auto"/><w:tblBorders>"#,
        r#"<w:top w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
        r#"<w:left w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
        r#"<w:bottom w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
        r#"<w:right w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
        r#"<w:insideH w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
        r#"<w:insideV w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
        r#"</w:tblBorders></w:tblPr>"#,
    ));
    out.push_str("<w:tblGrid>");
    for _ in 0..table.columns {
        out.push_str(&format!(r#"<w:gridCol w:w="{CELL_WIDTH_TWIPS}"/>"#));
    }
    out.push_str("</w:tblGrid>");
    for row in &table.rows {
        out.push_str("<w:tr>");
        for cell in &row.cells {
            // A table cell must contain at least one block; an empty
            // paragraph satisfies that for blank cells.
            out.push_str(&format!(
                r#"<w:tc><w:tcPr><w:tcW w:w="{CELL_WIDTH_TWIPS}" w:type="dxa"/></w:tcPr><w:p>"#
            ));
            if !cell.is_empty() {
                out.push_str(r#"<w:r><w:t xml:space="preserve">"#);
                out.push_str(&xml_escape(cell));
                out.push_str("</w:t></w:r>");
            }
            out.push_str("</w:p></w:tc>");
        }
        out.push_str("</w:tr>");
    }
    out.push_str("</w:tbl>");
}

/// Render word/styles.xml from the registry contents.
pub fn styles_xml(registry: &StyleRegistry) -> String {
    let mut styles = String::new();
    for definition in registry.iter() {
        push_style(&mut styles, definition);
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">{styles}</w:styles>"#
    )
}

fn push_style(out: &mut String, definition: &StyleDefinition) {
    let default_marker = if definition.name == STYLE_NORMAL {
        r#" w:default="1""#
    } else {
        ""
    };
    out.push_str(&format!(
        r#"<w:style w:type="{}" w:styleId="{}"{}>"#,
        definition.kind.label(),
        xml_escape(&definition.name),
        default_marker
    ));
    out.push_str(&format!(
        r#"<w:name w:val="{}"/>"#,
        xml_escape(&definition.name)
    ));
    if definition.kind == StyleKind::Paragraph && definition.name != STYLE_NORMAL {
        out.push_str(r#"<w:basedOn w:val="Normal"/>"#);
    }
    out.push_str("<w:qFormat/>");

    let attrs = &definition.attributes;
    if let Some(alignment) = attrs.alignment {
        out.push_str(&format!(
            r#"<w:pPr><w:jc w:val="{}"/></w:pPr>"#,
            alignment.wml_value()
        ));
    }

    let has_run_properties = attrs.bold
        || attrs.italic
        || attrs.underline
        || attrs.monospace
        || attrs.size_half_points.is_some()
        || attrs.color.is_some();
    if has_run_properties {
        out.push_str("<w:rPr>");
        if attrs.monospace {
            out.push_str(
                r#"<w:rFonts w:ascii="Consolas" w:hAnsi="Consolas" w:cs="Consolas"/>"#,
            );
        }
        if attrs.bold {
            out.push_str("<w:b/>");
        }
        if attrs.italic {
            out.push_str("<w:i/>");
        }
        if attrs.underline {
            out.push_str(r#"<w:u w:val="single"/>"#);
        }
        if let Some(color) = &attrs.color {
            out.push_str(&format!(r#"<w:color w:val="{}"/>"#, xml_escape(color)));
        }
        if let Some(size) = attrs.size_half_points {
            out.push_str(&format!(r#"<w:sz w:val="{size}"/>"#));
        }
        out.push_str("</w:rPr>");
    }

    out.push_str("</w:style>");
}
