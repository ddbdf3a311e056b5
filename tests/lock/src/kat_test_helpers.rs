//! Helpers for spawning the runner and verifier fixtures.
//!
//! Fixture binaries are resolved next to the running test binary, the way
//! `cargo test` lays out `target/<profile>/`.

use std::path::{Path, PathBuf};
use std::process::Command;

/// BLAKE2s-256 of the empty message.
pub const EMPTY_DIGEST: &str = "69217a3079908094e11121d042354a7c1f55b6482ca1a51e1b250dfd1ed0eef9";

/// BLAKE2s-256 of `"abc"`.
pub const ABC_DIGEST: &str = "508c5e8c327c14e2e1a72ba34eeb452f37458b209ed63a294d999b4c86675982";

/// Path to a binary built from this package.
///
/// # Panics
///
/// Panics if the test binary's directory cannot be resolved.
#[must_use]
pub fn fixture_binary(name: &str) -> PathBuf {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push(format!("{name}{}", std::env::consts::EXE_SUFFIX));
    path
}

/// One KAT record as `(hash, key, in, out)`.
pub type KatEntry<'a> = (&'a str, &'a str, &'a str, &'a str);

/// Render records as KAT JSON.
#[must_use]
pub fn kat_json(entries: &[KatEntry<'_>]) -> String {
    let records: Vec<serde_json::Value> = entries
        .iter()
        .map(|&(hash, key, input, expected)| {
            serde_json::json!({
                "hash": hash,
                "key": key,
                "in": input,
                "out": expected,
            })
        })
        .collect();
    serde_json::Value::Array(records).to_string()
}

/// Write KAT JSON for `entries` to `dir/name` and return the path.
///
/// # Panics
///
/// Panics if the file cannot be written.
#[must_use]
pub fn write_kat(dir: &Path, name: &str, entries: &[KatEntry<'_>]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, kat_json(entries))
        .unwrap_or_else(|e| panic!("cannot write {}: {e}", path.display()));
    path
}

/// Captured result of one `runner_fixture` process.
#[derive(Debug)]
pub struct RunnerOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Run `runner_fixture` in `cwd` with `args`.
///
/// `RUST_LOG` is cleared so stderr only carries warnings and errors.
///
/// # Panics
///
/// Panics if the fixture cannot be spawned or prints non-UTF-8.
#[must_use]
pub fn run_runner(cwd: &Path, args: &[&str]) -> RunnerOutput {
    let bin = fixture_binary("runner_fixture");
    let output = Command::new(&bin)
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn {}: {e}", bin.display()));

    RunnerOutput {
        code: output.status.code(),
        stdout: String::from_utf8(output.stdout).expect("stdout is valid UTF-8"),
        stderr: String::from_utf8(output.stderr).expect("stderr is valid UTF-8"),
    }
}

/// Absolute path of a verifier fixture, as a `String` for argument lists.
#[must_use]
pub fn verifier_arg(name: &str) -> String {
    fixture_binary(name).to_string_lossy().to_string()
}
