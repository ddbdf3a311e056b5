//! Command-line front end for the runner.
//!
//! `kat-runner [VECTORS] [--verifier PATH] [--strict] [--report PATH]`
//!
//! With no options this behaves like the legacy harness: run `build/test`
//! against the given file (or `./blake2-kat.json`), print the summary,
//! exit 0.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use crate::config::{missing_vectors_message, RunnerConfig};
use crate::error::RunError;
use crate::logging::init_tracing;
use crate::report::{write_report, RunReport};
use crate::runner::{run, RunSummary};
use crate::verifier::{ProcessVerifier, Verifier};

#[derive(Parser, Debug)]
#[command(
    name = "kat-runner",
    about = "Check a BLAKE2s verifier executable against KAT vectors"
)]
pub struct Args {
    /// KAT JSON file. Defaults to ./blake2-kat.json when present.
    #[arg(value_name = "VECTORS")]
    pub vectors: Option<PathBuf>,

    /// Verifier executable, invoked once per vector with the hex input.
    #[arg(long, value_name = "PATH")]
    pub verifier: Option<PathBuf>,

    /// Exit with status 1 if any vector fails.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub strict: bool,

    /// Write a JSON run report to this path.
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,
}

impl From<Args> for RunnerConfig {
    fn from(args: Args) -> Self {
        Self {
            vectors: args.vectors,
            verifier: args.verifier,
            strict: args.strict,
            report: args.report,
        }
    }
}

/// How an invocation ended, short of a fatal error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// No vector file was found; the pointer message was printed.
    NoVectors,
    /// Vectors were run.
    Completed(RunSummary),
}

impl Status {
    /// Process exit status. Failures only count under `strict`.
    #[must_use]
    pub fn exit_code(&self, strict: bool) -> u8 {
        match self {
            Self::Completed(summary) if strict && summary.tally.has_failures() => 1,
            _ => 0,
        }
    }
}

/// Resolve the vector file, run it, and write the report if configured.
///
/// `cwd` is where `blake2-kat.json` is looked up. The verifier is only
/// invoked when a vector file was found.
///
/// # Errors
///
/// Returns any [`RunError`] from loading, running, or writing the report.
pub fn execute(
    config: &RunnerConfig,
    cwd: &Path,
    verifier: &mut dyn Verifier,
    out: &mut dyn Write,
) -> Result<Status, RunError> {
    let Some(vectors) = config.resolve_vectors(cwd) else {
        writeln!(out, "{}", missing_vectors_message())?;
        return Ok(Status::NoVectors);
    };

    let summary = run(&vectors, verifier, out)?;

    if let Some(report_path) = &config.report {
        let report = RunReport::new(&vectors, &config.verifier_path(), &summary);
        write_report(&report, report_path)?;
        info!(path = %report_path.display(), "report written");
    }

    Ok(Status::Completed(summary))
}

/// Entry point for the `kat-runner` binary.
#[must_use]
pub fn main_entry() -> ExitCode {
    let config = RunnerConfig::from(Args::parse());
    if let Err(e) = init_tracing() {
        eprintln!("warning: logging not initialized: {e}");
    }

    let mut verifier = ProcessVerifier::new(config.verifier_path());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = execute(&config, Path::new("."), &mut verifier, &mut out);
    let _ = out.flush();

    match result {
        Ok(status) => ExitCode::from(status.exit_code(config.strict)),
        Err(e) => {
            error!(error = %e, "run aborted");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
