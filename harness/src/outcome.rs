//! Classifying a verifier answer against the expected digest.

use kat_vectors::record::TestVectorRecord;
use serde::Serialize;

/// Verifier output prefix meaning "this build declines the vector".
pub const SKIP_PREFIX: &str = "skip:";

/// A failed vector: what went in, what was expected, what came back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// Zero-based position of the record in the KAT file.
    pub index: usize,
    /// Hex input handed to the verifier.
    pub input: String,
    /// Expected hex digest from the KAT file.
    pub expected: String,
    /// Trimmed verifier output.
    pub actual: String,
}

impl Mismatch {
    /// Human-readable diagnostic, three lines, no trailing newline.
    #[must_use]
    pub fn diagnostic(&self) -> String {
        format!(
            "Fail for input: {}\n  expected: {}\n  actual:   {}",
            self.input, self.expected, self.actual
        )
    }
}

/// Classification of one applicable record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Output matched the expected digest exactly.
    Success,
    /// The verifier declined; `reason` is the text after `skip:`.
    Skip { reason: String },
    /// Output did not match and was not a skip.
    Fail(Mismatch),
}

/// Classify raw verifier output for the record at `index`.
///
/// The output is trimmed first. A `skip:` prefix wins over a digest match;
/// otherwise comparison is exact and case-sensitive.
#[must_use]
pub fn classify(index: usize, record: &TestVectorRecord, raw_output: &str) -> Outcome {
    let actual = raw_output.trim();
    if let Some(reason) = actual.strip_prefix(SKIP_PREFIX) {
        return Outcome::Skip {
            reason: reason.trim().to_string(),
        };
    }
    if actual == record.expected {
        return Outcome::Success;
    }
    Outcome::Fail(Mismatch {
        index,
        input: record.input.clone(),
        expected: record.expected.clone(),
        actual: actual.to_string(),
    })
}
