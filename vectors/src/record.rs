//! The test vector record as it appears in a KAT file.

use serde::{Deserialize, Serialize};

/// One entry from a KAT file.
///
/// Records are read-only after loading. Unknown JSON fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestVectorRecord {
    /// Hash algorithm this vector targets (e.g. `"blake2s"`, `"blake2b"`).
    pub hash: String,
    /// Keying material. Absent, `null` and `""` all mean unkeyed.
    #[serde(default)]
    pub key: Option<String>,
    /// Input message, hex-encoded.
    #[serde(rename = "in")]
    pub input: String,
    /// Expected digest, hex-encoded.
    #[serde(rename = "out")]
    pub expected: String,
}

impl TestVectorRecord {
    /// Whether the record carries non-empty keying material.
    #[must_use]
    pub fn is_keyed(&self) -> bool {
        self.key.as_deref().is_some_and(|k| !k.is_empty())
    }
}
