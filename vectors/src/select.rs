//! Selecting the records a BLAKE2s verifier should be run against.

use crate::record::TestVectorRecord;

/// The `hash` value a record must carry to be run.
pub const TARGET_HASH: &str = "blake2s";

/// A record is applicable when it targets [`TARGET_HASH`] exactly and is unkeyed.
#[must_use]
pub fn is_applicable(record: &TestVectorRecord) -> bool {
    record.hash == TARGET_HASH && !record.is_keyed()
}

/// Applicable records with their zero-based position in the file.
pub fn applicable<'a>(
    records: &'a [TestVectorRecord],
) -> impl Iterator<Item = (usize, &'a TestVectorRecord)> + 'a {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| is_applicable(record))
}
