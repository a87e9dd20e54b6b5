//! Error types for the exporter.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, ExportError>;

/// Fatal failures of an export run. There is no partial-success mode: every
/// variant aborts the run before the affected output reaches a final state.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ExportError {
    /// Scenery document is not well-formed XML.
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// An element carried a variable name but no initial value. Animation
    /// correctness depends on a start value, so nothing is guessed.
    #[error("animation variable '{variable}' has no initial value")]
    MissingValue { variable: String },

    /// The emitted name would be empty (blank tag text, or a raw name that
    /// is nothing but the parameter prefix).
    #[error("animation variable name '{raw_name}' is empty once the parameter prefix is stripped")]
    EmptyName { raw_name: String },

    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
}
