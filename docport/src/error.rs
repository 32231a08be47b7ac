//! Error types for conversion operations

use std::fmt;

/// Errors that can occur while converting a markup file to a document
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Input bytes could not be decoded with the configured encoding
    Decode(String),
    /// Style registration collision (same name, different kind)
    Style(String),
    /// Error while serializing or writing the output package
    Save(String),
    /// Error enumerating the input directory or preparing the output directory
    Batch(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Decode(msg) => write!(f, "Decode error: {msg}"),
            ConvertError::Style(msg) => write!(f, "Style error: {msg}"),
            ConvertError::Save(msg) => write!(f, "Save error: {msg}"),
            ConvertError::Batch(msg) => write!(f, "Batch error: {msg}"),
        }
    }
}

impl std::error::Error for ConvertError {}
