//! Loading KAT files from disk.
//!
//! The whole file is decoded up front: a file that is not a JSON array of
//! well-formed records is rejected before any vector is run.

use std::path::Path;

use crate::record::TestVectorRecord;

/// Error loading a KAT file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The file is missing or unreadable.
    Io { path: String, detail: String },
    /// The contents are not a JSON array of test vector records.
    Json { detail: String },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, detail } => write!(f, "cannot read {path}: {detail}"),
            Self::Json { detail } => write!(f, "invalid KAT JSON: {detail}"),
        }
    }
}

impl std::error::Error for LoadError {}

/// Parse KAT JSON text into records, preserving file order.
///
/// # Errors
///
/// Returns [`LoadError::Json`] if the text is not valid JSON, its top level
/// is not an array, or an element lacks the `hash`/`in`/`out` strings.
pub fn parse_vectors(text: &str) -> Result<Vec<TestVectorRecord>, LoadError> {
    serde_json::from_str(text).map_err(|e| LoadError::Json {
        detail: format!("{e}"),
    })
}

/// Read and parse the KAT file at `path`.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read (including invalid
/// UTF-8), or [`LoadError::Json`] as for [`parse_vectors`].
pub fn load_vectors(path: &Path) -> Result<Vec<TestVectorRecord>, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        detail: format!("{e}"),
    })?;
    parse_vectors(&text)
}
