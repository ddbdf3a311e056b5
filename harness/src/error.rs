//! Fatal run errors.
//!
//! Only conditions that abort the whole run live here. A digest mismatch or
//! a verifier `skip:` answer is an [`crate::outcome::Outcome`], never an error.

use kat_vectors::load::LoadError;

use crate::verifier::VerifierError;

/// Error that terminates a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The KAT file is missing, unreadable, or not a JSON array of records.
    MalformedInput(LoadError),
    /// The verifier executable could not be launched.
    VerifierUnavailable { program: String, detail: String },
    /// Writing diagnostics or the summary to the output stream failed.
    Output { detail: String },
    /// The JSON report could not be written.
    ReportWrite { path: String, detail: String },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedInput(e) => write!(f, "malformed input: {e}"),
            Self::VerifierUnavailable { program, detail } => {
                write!(f, "cannot launch verifier {program}: {detail}")
            }
            Self::Output { detail } => write!(f, "output error: {detail}"),
            Self::ReportWrite { path, detail } => {
                write!(f, "cannot write report {path}: {detail}")
            }
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedInput(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LoadError> for RunError {
    fn from(e: LoadError) -> Self {
        Self::MalformedInput(e)
    }
}

impl From<VerifierError> for RunError {
    fn from(e: VerifierError) -> Self {
        match e {
            VerifierError::Unavailable { program, detail } => {
                Self::VerifierUnavailable { program, detail }
            }
        }
    }
}

impl From<std::io::Error> for RunError {
    fn from(e: std::io::Error) -> Self {
        Self::Output {
            detail: format!("{e}"),
        }
    }
}
