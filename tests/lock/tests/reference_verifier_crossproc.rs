//! The reference verifier fixture honors the verifier process contract:
//! one hex argument in, one digest line out.

use std::process::Command;

use lock_tests::kat_test_helpers::{fixture_binary, ABC_DIGEST, EMPTY_DIGEST};

fn run_verifier(input: &str) -> std::process::Output {
    let bin = fixture_binary("reference_verifier");
    Command::new(&bin)
        .arg(input)
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn {}: {e}", bin.display()))
}

#[test]
fn known_digests() {
    for (input, digest) in [("", EMPTY_DIGEST), ("616263", ABC_DIGEST)] {
        let output = run_verifier(input);
        assert!(output.status.success(), "input {input:?}");
        assert_eq!(String::from_utf8(output.stdout).unwrap(), format!("{digest}\n"));
    }
}

#[test]
fn agrees_with_library() {
    let input = "00".repeat(200);
    let output = run_verifier(&input);
    let expected = kat_verifier::digest_hex(&[0u8; 200]);
    assert_eq!(String::from_utf8(output.stdout).unwrap().trim(), expected);
}

#[test]
fn invalid_hex_prints_nothing_on_stdout() {
    let output = run_verifier("not-hex");
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid hex input"));
}
