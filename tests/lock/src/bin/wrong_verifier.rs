//! Verifier fixture that answers every vector with the same wrong digest.
//!
//! Usage: `wrong_verifier` `<hex-input>`
//! Output: 64 hex zeros on stdout; exits 1, which the runner must ignore.

/// The digest this fixture always prints.
const WRONG_DIGEST: &str = "0000000000000000000000000000000000000000000000000000000000000000";

fn main() {
    println!("{WRONG_DIGEST}");
    std::process::exit(1);
}
