//! Conformance testing harness for the Walrus runtime.
//!
//! This crate provides:
//! - Fixture format: JSON descriptions of runtime call sequences with
//!   expected stdout bytes and return values
//! - In-process execution: fixture cases run against `walrus-rt-core`
//!   renderers and scanner, the same code the ABI entry points delegate to
//! - Verification: byte-exact comparison with rendered diffs on mismatch
//! - Report generation: human-readable markdown conformance reports
//!
//! The shipped suite lives in `fixtures/runtime_io.json` and covers every
//! observable property of the five runtime operations.

#![forbid(unsafe_code)]

pub mod error;
pub mod exec;
pub mod fixtures;
pub mod report;
pub mod runner;

pub use error::HarnessError;
pub use fixtures::{FixtureCase, FixtureSet, Op};
pub use runner::{TestRunner, VerificationResult};
