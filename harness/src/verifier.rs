//! The verifier seam: the implementation under test, seen from the harness.
//!
//! The production verifier is an external executable taking the hex input as
//! its only argument and answering on stdout. The trait exists so the runner
//! can be driven by in-process doubles.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Error invoking a verifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifierError {
    /// The verifier process could not be spawned.
    Unavailable { program: String, detail: String },
}

impl std::fmt::Display for VerifierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable { program, detail } => {
                write!(f, "cannot launch verifier {program}: {detail}")
            }
        }
    }
}

impl std::error::Error for VerifierError {}

/// Something that answers one KAT input at a time.
pub trait Verifier {
    /// Hand `input_hex` to the implementation under test and return its raw
    /// stdout text (untrimmed).
    ///
    /// # Errors
    ///
    /// Returns [`VerifierError::Unavailable`] if the implementation cannot
    /// be reached at all.
    fn invoke(&mut self, input_hex: &str) -> Result<String, VerifierError>;
}

/// Verifier backed by an external executable, run once per input.
///
/// Stdin is closed and stderr is discarded. The exit status is not inspected.
/// Non-UTF-8 stdout is decoded lossily.
#[derive(Debug, Clone)]
pub struct ProcessVerifier {
    program: PathBuf,
}

impl ProcessVerifier {
    /// A verifier that runs `program`. Relative paths resolve against the
    /// working directory.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The executable this verifier runs.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Verifier for ProcessVerifier {
    fn invoke(&mut self, input_hex: &str) -> Result<String, VerifierError> {
        let output = Command::new(&self.program)
            .arg(input_hex)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| VerifierError::Unavailable {
                program: self.program.display().to_string(),
                detail: format!("{e}"),
            })?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
