//! Shared helpers for the cross-process lock tests.

pub mod kat_test_helpers;
