//! Harness runner: load vectors, drive the verifier, classify, tally.
//!
//! # Pipeline
//!
//! ```text
//! load_vectors() → applicable() → [invoke() → classify() → tally] × N
//!   → summary line
//! ```
//!
//! Processing is sequential and in file order. Each verifier invocation
//! blocks until the verifier exits. Mismatch diagnostics are written as
//! they happen; the summary line is written last.

use std::io::Write;
use std::path::Path;

use kat_vectors::load::load_vectors;
use kat_vectors::record::TestVectorRecord;
use kat_vectors::select::applicable;
use tracing::{debug, info, warn};

use crate::error::RunError;
use crate::outcome::{classify, Mismatch, Outcome};
use crate::tally::Tally;
use crate::verifier::Verifier;

/// Result of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Counters over applicable records.
    pub tally: Tally,
    /// Failed vectors, in file order.
    pub failures: Vec<Mismatch>,
}

/// Run every applicable record in `records` through `verifier`.
///
/// Records for other hashes, and keyed records, are passed over without
/// being counted. A diagnostic is written to `out` for each failure.
///
/// # Errors
///
/// Returns [`RunError::VerifierUnavailable`] if the verifier cannot be
/// launched (no partial summary is returned), or [`RunError::Output`] if
/// writing to `out` fails.
pub fn run_records(
    records: &[TestVectorRecord],
    verifier: &mut dyn Verifier,
    out: &mut dyn Write,
) -> Result<RunSummary, RunError> {
    let mut summary = RunSummary::default();

    for (index, record) in applicable(records) {
        let raw = verifier.invoke(&record.input)?;
        let outcome = classify(index, record, &raw);
        summary.tally.record(&outcome);

        match outcome {
            Outcome::Success => debug!(index, "vector passed"),
            Outcome::Skip { reason } => debug!(index, %reason, "verifier skipped vector"),
            Outcome::Fail(mismatch) => {
                debug!(index, actual = %mismatch.actual, "vector failed");
                writeln!(out, "{}", mismatch.diagnostic())?;
                summary.failures.push(mismatch);
            }
        }
    }

    if summary.tally.total() == 0 {
        warn!(
            records = records.len(),
            "no unkeyed blake2s vectors in input"
        );
    }

    Ok(summary)
}

/// Load the KAT file at `path`, run it, and write the summary line to `out`.
///
/// # Errors
///
/// Returns [`RunError::MalformedInput`] if the file cannot be loaded, and
/// otherwise the errors of [`run_records`].
pub fn run(
    path: &Path,
    verifier: &mut dyn Verifier,
    out: &mut dyn Write,
) -> Result<RunSummary, RunError> {
    let records = load_vectors(path)?;
    info!(path = %path.display(), records = records.len(), "loaded KAT vectors");

    let summary = run_records(&records, verifier, out)?;
    writeln!(out, "{}", summary.tally.summary_line())?;

    let tally = summary.tally;
    info!(
        total = tally.total(),
        success = tally.success,
        skip = tally.skip,
        fail = tally.fail,
        "run complete"
    );
    Ok(summary)
}
