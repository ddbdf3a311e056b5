//! Verifier fixture that declines every vector.
//!
//! Usage: `skipping_verifier` `<hex-input>`
//! Output: `skip:unsupported` on stdout, chatter on stderr.

fn main() {
    let input = std::env::args().nth(1).unwrap_or_default();
    eprintln!("declining {} hex chars", input.len());
    println!("skip:unsupported");
}
