//! Streaming BLAKE2s verifier fixture.
//!
//! Usage: `reference_verifier` `<hex-input>`
//! Output: one line, the lowercase hex BLAKE2s-256 digest.

use kat_verifier::{respond, Response, VerifierMode};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let input = args.get(1).expect("usage: reference_verifier <hex-input>");

    match respond(input, VerifierMode::Streaming) {
        Response::InvalidInput(detail) => {
            eprintln!("invalid hex input: {detail}");
            std::process::exit(2);
        }
        response => {
            let line = response.stdout_line().expect("digest or skip line");
            println!("{line}");
        }
    }
}
