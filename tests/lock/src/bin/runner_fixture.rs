//! The `kat-runner` front end, built inside the lock-test package so
//! cross-process tests can spawn it next to the verifier fixtures.
//!
//! Usage: same as `kat-runner`.

use std::process::ExitCode;

fn main() -> ExitCode {
    kat_harness::cli::main_entry()
}
