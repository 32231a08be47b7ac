//! Output document model and builder
//!
//! This is the output half of the converter: an owned block/run model of a
//! Word document plus the small builder API the translator drives. Blocks
//! live in one ordered sequence; paragraphs and tables are addressed
//! through copyable handles so the translator can thread "the current
//! paragraph" through its recursion without borrowing into the document.
//!
//! Serialization is split out: [`xml`] renders WordprocessingML,
//! [`package`] wraps it into the OPC ZIP container.

pub mod package;
pub mod styles;
pub mod xml;

use crate::error::ConvertError;
use self::styles::{heading_style_name, StyleRegistry};
use std::path::Path;

/// A block-level element of the output document.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
}

/// A paragraph: optional paragraph-style name plus ordered run contents.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub style: Option<String>,
    pub children: Vec<RunContent>,
}

impl Paragraph {
    /// Concatenated text of all runs (formatting and breaks ignored).
    pub fn text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            if let RunContent::Run(run) = child {
                out.push_str(&run.text);
            }
        }
        out
    }

    /// The paragraph's runs, skipping break markers.
    pub fn runs(&self) -> impl Iterator<Item = &Run> {
        self.children.iter().filter_map(|child| match child {
            RunContent::Run(run) => Some(run),
            RunContent::Break => None,
        })
    }
}

/// Content of a paragraph: a formatted run or an explicit line break.
#[derive(Debug, Clone, PartialEq)]
pub enum RunContent {
    Run(Run),
    Break,
}

/// A contiguous span of text sharing one formatting state.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub text: String,
    pub format: RunFormat,
}

/// Formatting flags for a run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunFormat {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    /// Named character style (e.g. the hyperlink style).
    pub style: Option<String>,
}

/// A table: column capacity plus rows of plain-text cells.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub columns: usize,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableRow {
    pub cells: Vec<String>,
}

/// Handle to a paragraph created by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParagraphHandle(usize);

/// Handle to a table created by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableHandle(usize);

/// The output document under construction.
#[derive(Debug, Clone)]
pub struct DocxDocument {
    blocks: Vec<Block>,
    styles: StyleRegistry,
}

impl DocxDocument {
    /// Create an empty document with the built-in style set registered.
    pub fn new() -> Result<Self, ConvertError> {
        Ok(DocxDocument {
            blocks: Vec::new(),
            styles: StyleRegistry::with_defaults()?,
        })
    }

    /// Append a plain paragraph.
    pub fn add_paragraph(&mut self) -> ParagraphHandle {
        self.push_paragraph(None)
    }

    /// Append a paragraph carrying a named paragraph style.
    pub fn add_styled_paragraph(&mut self, style: &str) -> ParagraphHandle {
        self.push_paragraph(Some(style.to_string()))
    }

    /// Append a heading paragraph for the given level (clamped to 1..=6).
    pub fn add_heading(&mut self, level: u8) -> ParagraphHandle {
        self.push_paragraph(Some(heading_style_name(level)))
    }

    fn push_paragraph(&mut self, style: Option<String>) -> ParagraphHandle {
        self.blocks.push(Block::Paragraph(Paragraph {
            style,
            children: Vec::new(),
        }));
        ParagraphHandle(self.blocks.len() - 1)
    }

    /// Append an empty (zero-row, zero-column) table.
    pub fn add_table(&mut self) -> TableHandle {
        self.blocks.push(Block::Table(Table::default()));
        TableHandle(self.blocks.len() - 1)
    }

    /// Append a formatted run to a paragraph.
    pub fn append_run(&mut self, paragraph: ParagraphHandle, text: &str, format: RunFormat) {
        if let Some(Block::Paragraph(p)) = self.blocks.get_mut(paragraph.0) {
            p.children.push(RunContent::Run(Run {
                text: text.to_string(),
                format,
            }));
        }
    }

    /// Append an explicit line break inside a paragraph.
    pub fn append_break(&mut self, paragraph: ParagraphHandle) {
        if let Some(Block::Paragraph(p)) = self.blocks.get_mut(paragraph.0) {
            p.children.push(RunContent::Break);
        }
    }

    /// Grow a table by one column; existing rows gain an empty cell.
    pub fn add_column(&mut self, table: TableHandle) {
        if let Some(Block::Table(t)) = self.blocks.get_mut(table.0) {
            t.columns += 1;
            for row in &mut t.rows {
                row.cells.push(String::new());
            }
        }
    }

    /// Append an empty row sized to the current column capacity.
    ///
    /// Returns the row index for use with [`DocxDocument::set_cell_text`].
    pub fn add_row(&mut self, table: TableHandle) -> usize {
        if let Some(Block::Table(t)) = self.blocks.get_mut(table.0) {
            t.rows.push(TableRow {
                cells: vec![String::new(); t.columns],
            });
            t.rows.len() - 1
        } else {
            0
        }
    }

    /// Set a cell's text. Returns false when the position is out of range,
    /// in which case the document is unchanged.
    pub fn set_cell_text(
        &mut self,
        table: TableHandle,
        row: usize,
        col: usize,
        text: &str,
    ) -> bool {
        if let Some(Block::Table(t)) = self.blocks.get_mut(table.0) {
            if let Some(cell) = t.rows.get_mut(row).and_then(|r| r.cells.get_mut(col)) {
                *cell = text.to_string();
                return true;
            }
        }
        false
    }

    /// The document's block sequence.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The document's style registry.
    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    /// Serialize the document and write the .docx package.
    pub fn save(&self, path: &Path) -> Result<(), ConvertError> {
        package::write_package(self, path)
    }
}
