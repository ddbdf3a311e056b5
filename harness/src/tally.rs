//! Run tally: success/fail/skip counters for applicable records.

use serde::Serialize;

use crate::outcome::Outcome;

/// Counters for one run. Every applicable record bumps exactly one of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub success: usize,
    pub fail: usize,
    pub skip: usize,
}

impl Tally {
    /// Number of applicable records processed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.success + self.fail + self.skip
    }

    /// Count one classified record.
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Success => self.success += 1,
            Outcome::Skip { .. } => self.skip += 1,
            Outcome::Fail(_) => self.fail += 1,
        }
    }

    /// Whether any record failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.fail > 0
    }

    /// The one-line run summary.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "Test run: {}, success: {}, skip: {}, fail: {}",
            self.total(),
            self.success,
            self.skip,
            self.fail
        )
    }
}
