//! Test module organization
//!
//! This module re-exports test helpers for use in test files.

mod helpers;

#[allow(unused_imports)]
pub use helpers::{run_keygen, run_keygen_stdout, CountingRng, FailingRng};
