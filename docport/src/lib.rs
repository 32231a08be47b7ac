//! Markup-to-Word conversion for the docport tool
//!
//!     This crate converts semi-structured markup documents (HTML fragments,
//!     often saved with a .txt extension) into WordprocessingML (.docx)
//!     packages, keeping a bounded set of formatting: headings, emphasis,
//!     links, lists, tables, line breaks and plain paragraphs.
//!
//!     This is a pure lib: it powers the docport CLI but is shell agnostic,
//!     that is no code here should suppose a shell environment, be it to
//!     std print, read env vars etc. Recovered faults are reported through
//!     the `log` facade; per-file progress goes through the batch driver's
//!     callback.
//!
//! Architecture
//!
//!     The input side parses whatever html5ever can recover into the
//!     crate's own MarkupNode tree (./markup). The output side is an owned
//!     document model with a small builder API (./docx). Between them sits
//!     the translator (./translate): a recursive walk that threads the
//!     "current paragraph" as an explicit optional handle. Everything
//!     fallible happens before (decoding) or after (packaging) the walk,
//!     which keeps the core referentially transparent and testable per
//!     call.
//!
//!     The file structure:
//!     .
//!     ├── error.rs        # ConvertError
//!     ├── sanitize.rs     # control-character stripping
//!     ├── markup
//!     │   ├── mod.rs      # MarkupNode / Element tree
//!     │   └── parser.rs   # decoding + html5ever parsing
//!     ├── docx
//!     │   ├── mod.rs      # document model + builder
//!     │   ├── styles.rs   # style registry
//!     │   ├── xml.rs      # WordprocessingML emission
//!     │   └── package.rs  # OPC ZIP container
//!     ├── translate.rs    # the markup tree walker (the core)
//!     └── batch.rs        # directory driver + outcome accounting
//!
//! Library Choices
//!
//!     Parsing is offloaded to html5ever + markup5ever_rcdom rather than
//!     hand-rolling tag scanning: the inputs are malformed often enough
//!     that browser-grade error recovery is the feature, not a nicety.
//!     Decoding goes through encoding_rs so per-file detection stays
//!     deterministic. The .docx container is written with the zip crate;
//!     the WordprocessingML inside is small enough that it is emitted
//!     directly rather than through an XML library.

pub mod batch;
pub mod docx;
pub mod error;
pub mod markup;
pub mod sanitize;
pub mod translate;

pub use batch::{convert_directory, convert_file, BatchOptions, BatchReport, ConversionOutcome};
pub use docx::DocxDocument;
pub use error::ConvertError;

/// Convert already-decoded markup text into an in-memory document.
///
/// This is the whole per-file pipeline minus I/O: parse, register the
/// default styles, walk. Useful for callers (and tests) that want to
/// inspect the document model instead of writing a file.
pub fn convert_str(source: &str) -> Result<DocxDocument, ConvertError> {
    let tree = markup::parser::parse_markup(source);
    let mut doc = DocxDocument::new()?;
    translate::translate(&tree, &mut doc);
    Ok(doc)
}
