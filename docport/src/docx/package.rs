//! OPC packaging (the .docx ZIP container)
//!
//! A .docx file is a ZIP archive of XML parts. The package is assembled
//! fully in memory and flushed with a single filesystem write, so a failed
//! save never leaves a partial archive in the output directory.

use super::{xml, DocxDocument};
use crate::error::ConvertError;
use std::fmt::Display;
use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

fn content_types_xml() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
  <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
</Types>"#
}

fn package_rels_xml() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#
}

fn document_rels_xml() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#
}

fn save_error(err: impl Display) -> ConvertError {
    ConvertError::Save(err.to_string())
}

/// Assemble the complete .docx package in memory.
pub fn build_package(doc: &DocxDocument) -> Result<Vec<u8>, ConvertError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file("[Content_Types].xml", options)
        .map_err(save_error)?;
    zip.write_all(content_types_xml().as_bytes())
        .map_err(save_error)?;

    zip.add_directory("_rels/", options).map_err(save_error)?;
    zip.start_file("_rels/.rels", options).map_err(save_error)?;
    zip.write_all(package_rels_xml().as_bytes())
        .map_err(save_error)?;

    zip.add_directory("word/", options).map_err(save_error)?;
    zip.add_directory("word/_rels/", options)
        .map_err(save_error)?;

    zip.start_file("word/document.xml", options)
        .map_err(save_error)?;
    zip.write_all(xml::document_xml(doc).as_bytes())
        .map_err(save_error)?;

    zip.start_file("word/_rels/document.xml.rels", options)
        .map_err(save_error)?;
    zip.write_all(document_rels_xml().as_bytes())
        .map_err(save_error)?;

    zip.start_file("word/styles.xml", options)
        .map_err(save_error)?;
    zip.write_all(xml::styles_xml(doc.styles()).as_bytes())
        .map_err(save_error)?;

    let cursor = zip.finish().map_err(save_error)?;
    Ok(cursor.into_inner())
}

/// Serialize the document and write it to `path` in one pass.
pub fn write_package(doc: &DocxDocument, path: &Path) -> Result<(), ConvertError> {
    let bytes = build_package(doc)?;
    fs::write(path, bytes)
        .map_err(|e| ConvertError::Save(format!("write {}: {e}", path.display())))
}
