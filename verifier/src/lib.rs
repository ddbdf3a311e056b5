//! Reference BLAKE2s verifier.
//!
//! Implements the verifier side of the KAT runner's process contract: one
//! hex-encoded message in, one line out. The line is either the hex
//! BLAKE2s-256 digest or `skip: <reason>` when this build cannot hash the
//! message.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

use blake2::{Blake2s256, Digest};

/// BLAKE2s compression block size in bytes.
pub const BLOCK_BYTES: usize = 64;

/// Prefix that tells the runner a vector was declined, not failed.
pub const SKIP_PREFIX: &str = "skip:";

/// Which inputs this build accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifierMode {
    /// Any input length.
    Streaming,
    /// Only a non-zero whole number of [`BLOCK_BYTES`] blocks.
    BlockAligned,
}

impl VerifierMode {
    /// The mode selected by the `block-aligned` cargo feature.
    #[must_use]
    pub const fn from_build() -> Self {
        if cfg!(feature = "block-aligned") {
            Self::BlockAligned
        } else {
            Self::Streaming
        }
    }
}

/// Result of handling one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Lowercase hex digest.
    Digest(String),
    /// The input is outside what this build supports.
    Skip(String),
    /// The argument is not valid hex.
    InvalidInput(String),
}

impl Response {
    /// The stdout line for this response, if any.
    #[must_use]
    pub fn stdout_line(&self) -> Option<String> {
        match self {
            Self::Digest(hex) => Some(hex.clone()),
            Self::Skip(reason) => Some(format!("{SKIP_PREFIX} {reason}")),
            Self::InvalidInput(_) => None,
        }
    }
}

/// Hash `message` with BLAKE2s-256 and hex-encode the digest.
#[must_use]
pub fn digest_hex(message: &[u8]) -> String {
    hex::encode(Blake2s256::digest(message))
}

/// Handle one hex-encoded input under `mode`.
#[must_use]
pub fn respond(input_hex: &str, mode: VerifierMode) -> Response {
    let message = match hex::decode(input_hex) {
        Ok(bytes) => bytes,
        Err(e) => return Response::InvalidInput(format!("{e}")),
    };

    if mode == VerifierMode::BlockAligned
        && (message.is_empty() || message.len() % BLOCK_BYTES != 0)
    {
        return Response::Skip(format!(
            "input length {} is not a non-zero multiple of {BLOCK_BYTES}",
            message.len()
        ));
    }

    Response::Digest(digest_hex(&message))
}
