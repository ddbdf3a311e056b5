//! JSON run report.
//!
//! Written only when a report path is configured. The report restates the
//! tally (with its derived total) and lists every mismatch in file order.

use std::path::Path;

use serde::Serialize;

use crate::error::RunError;
use crate::outcome::Mismatch;
use crate::runner::RunSummary;
use crate::tally::Tally;

/// Serializable record of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// KAT file that was run.
    pub vectors: String,
    /// Verifier executable that answered.
    pub verifier: String,
    /// Applicable records processed.
    pub total: usize,
    /// Counters.
    pub tally: Tally,
    /// Failed vectors.
    pub failures: Vec<Mismatch>,
}

impl RunReport {
    #[must_use]
    pub fn new(vectors: &Path, verifier: &Path, summary: &RunSummary) -> Self {
        Self {
            vectors: vectors.display().to_string(),
            verifier: verifier.display().to_string(),
            total: summary.tally.total(),
            tally: summary.tally,
            failures: summary.failures.clone(),
        }
    }

    /// Pretty-printed JSON with a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_json_bytes(&self) -> serde_json::Result<Vec<u8>> {
        let mut bytes = serde_json::to_vec_pretty(self)?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}

/// Write `report` to `path`, replacing any existing file.
///
/// The bytes go to a sibling temp file first and are renamed into place, so
/// a reader never sees a half-written report.
///
/// # Errors
///
/// Returns [`RunError::ReportWrite`] on serialization or I/O failure.
pub fn write_report(report: &RunReport, path: &Path) -> Result<(), RunError> {
    let io_error = |detail: String| RunError::ReportWrite {
        path: path.display().to_string(),
        detail,
    };

    let bytes = report
        .to_json_bytes()
        .map_err(|e| io_error(format!("serialize: {e}")))?;

    let file_name = path
        .file_name()
        .ok_or_else(|| io_error("path has no file name".into()))?;
    let temp_path = path.with_file_name(format!(".tmp_{}", file_name.to_string_lossy()));

    std::fs::write(&temp_path, &bytes)
        .map_err(|e| io_error(format!("write {}: {e}", temp_path.display())))?;
    std::fs::rename(&temp_path, path).map_err(|e| {
        io_error(format!(
            "rename {} → {}: {e}",
            temp_path.display(),
            path.display()
        ))
    })?;

    Ok(())
}
