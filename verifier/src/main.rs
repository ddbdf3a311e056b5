//! `blake2s-verifier <hex-input>`: print the BLAKE2s-256 digest of the input.
//!
//! Prints `skip: <reason>` instead when the build does not support the input.
//! Invalid hex goes to stderr with exit code 2.

use std::process::ExitCode;

use kat_verifier::{respond, Response, VerifierMode};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let Some(input) = args.get(1) else {
        eprintln!("usage: blake2s-verifier <hex-input>");
        return ExitCode::from(2);
    };

    let response = respond(input, VerifierMode::from_build());
    if let Response::InvalidInput(detail) = &response {
        eprintln!("invalid hex input: {detail}");
        return ExitCode::from(2);
    }
    if let Some(line) = response.stdout_line() {
        println!("{line}");
    }
    ExitCode::SUCCESS
}
