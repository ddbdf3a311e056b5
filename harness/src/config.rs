//! Runner configuration and vector-file selection.
//!
//! Every field is an override; `None`/`false` means the legacy behavior
//! (verifier at `build/test`, vector file from the working directory, exit 0
//! regardless of failures, no report file).

use std::path::{Path, PathBuf};

/// Verifier executable used when none is configured.
pub const DEFAULT_VERIFIER: &str = "build/test";

/// Vector file picked up from the working directory when none is given.
pub const DEFAULT_VECTORS_FILE: &str = "blake2-kat.json";

/// Where the canonical BLAKE2 KAT file lives.
pub const KAT_SOURCE_URL: &str =
    "https://github.com/BLAKE2/BLAKE2/blob/master/testvectors/blake2-kat.json";

/// Runner configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Explicit KAT file. `None` falls back to [`DEFAULT_VECTORS_FILE`].
    pub vectors: Option<PathBuf>,
    /// Verifier executable. `None` uses [`DEFAULT_VERIFIER`].
    pub verifier: Option<PathBuf>,
    /// Exit non-zero when any vector fails.
    pub strict: bool,
    /// Also write a JSON run report here.
    pub report: Option<PathBuf>,
}

impl RunnerConfig {
    /// The verifier executable to run.
    #[must_use]
    pub fn verifier_path(&self) -> PathBuf {
        self.verifier
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_VERIFIER))
    }

    /// Pick the KAT file: the explicit path if set, else
    /// [`DEFAULT_VECTORS_FILE`] if it is a file in `cwd`, else nothing.
    #[must_use]
    pub fn resolve_vectors(&self, cwd: &Path) -> Option<PathBuf> {
        if let Some(path) = &self.vectors {
            return Some(path.clone());
        }
        let candidate = cwd.join(DEFAULT_VECTORS_FILE);
        candidate.is_file().then_some(candidate)
    }
}

/// Message printed when no vector file can be found.
#[must_use]
pub fn missing_vectors_message() -> String {
    format!("Provide a JSON test file, see:\n{KAT_SOURCE_URL}")
}
