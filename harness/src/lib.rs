//! KAT harness: drives an external BLAKE2s verifier over a KAT vector file.
//!
//! The harness loads vectors (via `kat-vectors`), invokes the verifier once
//! per applicable vector, classifies each answer, and prints a tally.
//!
//! The harness does NOT hash anything. The implementation under test lives
//! in the verifier executable; the harness owns selection, invocation,
//! classification and reporting.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod outcome;
pub mod report;
pub mod runner;
pub mod tally;
pub mod verifier;
