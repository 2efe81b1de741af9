//! Test execution engine.

use crate::exec::execute_case;
use crate::fixtures::FixtureSet;

/// Outcome of verifying one fixture case.
#[derive(Debug, Clone)]
pub struct VerificationResult {
    pub case_name: String,
    pub passed: bool,
    pub expected_stdout: String,
    pub actual_stdout: String,
    pub expected_returns: Vec<i64>,
    pub actual_returns: Vec<i64>,
    /// Human-readable mismatch description, present only on failure.
    pub diff: Option<String>,
}

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the verification campaign.
    pub campaign: String,
}

impl TestRunner {
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run all fixtures in a set and return per-case results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set
            .cases
            .iter()
            .map(|case| {
                let execution = execute_case(case);
                let actual_stdout = String::from_utf8_lossy(&execution.stdout).into_owned();
                let stdout_ok = execution.stdout == case.expected_stdout.as_bytes();
                let returns_ok = execution.returns == case.expected_returns;
                let passed = stdout_ok && returns_ok;

                let diff = if passed {
                    None
                } else {
                    Some(render_diff(
                        stdout_ok,
                        returns_ok,
                        &case.expected_stdout,
                        &actual_stdout,
                        &case.expected_returns,
                        &execution.returns,
                    ))
                };

                VerificationResult {
                    case_name: case.name.clone(),
                    passed,
                    expected_stdout: case.expected_stdout.clone(),
                    actual_stdout,
                    expected_returns: case.expected_returns.clone(),
                    actual_returns: execution.returns,
                    diff,
                }
            })
            .collect()
    }
}

fn render_diff(
    stdout_ok: bool,
    returns_ok: bool,
    expected_stdout: &str,
    actual_stdout: &str,
    expected_returns: &[i64],
    actual_returns: &[i64],
) -> String {
    let mut lines = Vec::new();
    if !stdout_ok {
        lines.push(format!("stdout expected: {expected_stdout:?}"));
        lines.push(format!("stdout actual:   {actual_stdout:?}"));
    }
    if !returns_ok {
        lines.push(format!("returns expected: {expected_returns:?}"));
        lines.push(format!("returns actual:   {actual_returns:?}"));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{FixtureCase, Op};

    fn one_case_set(case: FixtureCase) -> FixtureSet {
        FixtureSet {
            version: "1".into(),
            suite: "unit".into(),
            cases: vec![case],
        }
    }

    #[test]
    fn test_passing_case() {
        let set = one_case_set(FixtureCase {
            name: "int".into(),
            ops: vec![Op::PrintInt(7)],
            stdin: String::new(),
            expected_stdout: "Out: 7\n".into(),
            expected_returns: vec![0],
        });
        let results = TestRunner::new("unit").run(&set);
        assert!(results[0].passed);
        assert!(results[0].diff.is_none());
    }

    #[test]
    fn test_failing_case_gets_diff() {
        let set = one_case_set(FixtureCase {
            name: "wrong".into(),
            ops: vec![Op::PrintInt(7)],
            stdin: String::new(),
            expected_stdout: "Out: 8\n".into(),
            expected_returns: vec![0],
        });
        let results = TestRunner::new("unit").run(&set);
        assert!(!results[0].passed);
        let diff = results[0].diff.as_deref().unwrap();
        assert!(diff.contains("Out: 8"));
        assert!(diff.contains("Out: 7"));
    }
}
