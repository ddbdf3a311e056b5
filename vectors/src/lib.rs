//! KAT vectors: the record model and loader for BLAKE2 known-answer-test files.
//!
//! A KAT file is a JSON array of objects with `hash`, `key`, `in` and `out`
//! string fields (the layout of the upstream `blake2-kat.json`). This crate
//! only reads and selects records. Running them against a verifier is the
//! harness's job.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod load;
pub mod record;
pub mod select;
