//! Fixture loading and management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::HarnessError;

/// Fixture schema version understood by this harness.
pub const SCHEMA_VERSION: &str = "1";

/// One runtime operation in a fixture call sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "arg", rename_all = "snake_case")]
pub enum Op {
    /// `_print_int(arg)`
    PrintInt(i64),
    /// `_print_float(arg)`
    PrintFloat(f64),
    /// `_print_char(arg)`
    PrintChar(i64),
    /// `_print_str(arg)`
    PrintStr(String),
    /// `_gets_int()`
    GetsInt,
}

/// A single fixture test case: a call sequence, the stdin bytes available
/// to it, and the exact expected observations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Runtime calls issued in order.
    pub ops: Vec<Op>,
    /// Bytes available on standard input (consumed left to right).
    #[serde(default)]
    pub stdin: String,
    /// Expected standard output, byte for byte.
    pub expected_stdout: String,
    /// Expected return value of each op, in call order. Print operations
    /// always return 0; `gets_int` returns the parsed value or 0.
    pub expected_returns: Vec<i64>,
}

/// A collection of fixture cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Suite name.
    pub suite: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Parse a fixture set from JSON, rejecting unknown schema versions.
    pub fn from_json(json: &str) -> Result<Self, HarnessError> {
        let set: Self = serde_json::from_str(json)?;
        if set.version != SCHEMA_VERSION {
            return Err(HarnessError::SchemaVersion {
                found: set.version,
                expected: SCHEMA_VERSION.to_string(),
            });
        }
        Ok(set)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, HarnessError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path).map_err(|source| HarnessError::FixtureRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }
}
