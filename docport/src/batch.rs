//! Batch conversion driver
//!
//! Iterates a source directory, converts each recognized file and collects
//! per-file outcomes. Failures are caught at the file boundary: one broken
//! input never stops the batch. The driver itself never prints; progress
//! reporting goes through the caller's callback (see the docport CLI).

use crate::docx::DocxDocument;
use crate::error::ConvertError;
use crate::markup::parser::{self, EncodingPolicy};
use crate::translate;
use std::fs;
use std::path::Path;

/// Settings for a directory conversion run.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOptions {
    /// Extensions (without the dot) picked up from the input directory.
    pub extensions: Vec<String>,
    /// How input bytes are decoded.
    pub encoding: EncodingPolicy,
}

impl Default for BatchOptions {
    fn default() -> Self {
        BatchOptions {
            extensions: vec!["txt".to_string(), "html".to_string()],
            encoding: EncodingPolicy::Auto,
        }
    }
}

/// Result of converting one input file.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOutcome {
    pub filename: String,
    pub success: bool,
    pub error: Option<String>,
}

/// Aggregate accounting for a directory run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchReport {
    pub total: usize,
    pub converted: usize,
    pub failed: usize,
    pub outcomes: Vec<ConversionOutcome>,
}

impl BatchReport {
    /// The failed outcomes, in processing order.
    pub fn failures(&self) -> impl Iterator<Item = &ConversionOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.success)
    }
}

/// Convert a single markup file into a .docx document at `output`.
pub fn convert_file(
    input: &Path,
    output: &Path,
    encoding: EncodingPolicy,
) -> Result<(), ConvertError> {
    let bytes = fs::read(input)
        .map_err(|e| ConvertError::Decode(format!("read {}: {e}", input.display())))?;
    let source = parser::decode(&bytes, encoding)?;
    let tree = parser::parse_markup(&source);

    let mut doc = DocxDocument::new()?;
    translate::translate(&tree, &mut doc);
    doc.save(output)
}

/// Convert every recognized file in `input_dir` into `output_dir`.
///
/// The output directory is created if absent (only that directory, not its
/// parents), before any file is written. Files are processed in name
/// order; each outcome is handed to `on_outcome` as it happens and the
/// batch always runs to completion. Output names reuse the input stem with
/// a `.docx` extension; name collisions are not resolved (last write
/// wins).
pub fn convert_directory<F>(
    input_dir: &Path,
    output_dir: &Path,
    options: &BatchOptions,
    mut on_outcome: F,
) -> Result<BatchReport, ConvertError>
where
    F: FnMut(&ConversionOutcome),
{
    ensure_output_dir(output_dir)?;

    let entries = fs::read_dir(input_dir)
        .map_err(|e| ConvertError::Batch(format!("read {}: {e}", input_dir.display())))?;

    let mut names: Vec<String> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ConvertError::Batch(e.to_string()))?;
        let path = entry.path();
        if !path.is_file() || !has_recognized_extension(&path, &options.extensions) {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            names.push(name.to_string());
        }
    }
    names.sort();

    let mut report = BatchReport::default();
    for name in names {
        let input = input_dir.join(&name);
        let output = output_dir.join(output_name(&name));

        let outcome = match convert_file(&input, &output, options.encoding) {
            Ok(()) => ConversionOutcome {
                filename: name,
                success: true,
                error: None,
            },
            Err(err) => ConversionOutcome {
                filename: name,
                success: false,
                error: Some(err.to_string()),
            },
        };

        report.total += 1;
        if outcome.success {
            report.converted += 1;
        } else {
            report.failed += 1;
        }
        on_outcome(&outcome);
        report.outcomes.push(outcome);
    }

    Ok(report)
}

fn ensure_output_dir(dir: &Path) -> Result<(), ConvertError> {
    match fs::create_dir(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(ConvertError::Batch(format!(
            "create {}: {e}",
            dir.display()
        ))),
    }
}

fn has_recognized_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|known| known == ext))
}

/// Output filename: input stem with the document extension.
fn output_name(input_name: &str) -> String {
    let stem = Path::new(input_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(input_name);
    format!("{stem}.docx")
}
