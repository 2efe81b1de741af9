//! Markdown conformance report generation.

use std::fmt::Write as _;

use crate::runner::VerificationResult;

/// Summary of one verification run.
#[derive(Debug, Clone)]
pub struct ConformanceReport {
    pub campaign: String,
    pub total: usize,
    pub passed: usize,
}

impl ConformanceReport {
    pub fn failed(&self) -> usize {
        self.total - self.passed
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

/// Render results as a markdown report and its summary.
pub fn render_markdown(
    campaign: &str,
    results: &[VerificationResult],
) -> (ConformanceReport, String) {
    let passed = results.iter().filter(|r| r.passed).count();
    let report = ConformanceReport {
        campaign: campaign.to_string(),
        total: results.len(),
        passed,
    };

    let mut md = String::new();
    let _ = writeln!(md, "# Walrus runtime conformance: {campaign}");
    let _ = writeln!(md);
    let _ = writeln!(
        md,
        "**{} / {} cases passed**",
        report.passed, report.total
    );
    let _ = writeln!(md);
    let _ = writeln!(md, "| Case | Result |");
    let _ = writeln!(md, "|------|--------|");
    for r in results {
        let outcome = if r.passed { "pass" } else { "FAIL" };
        let _ = writeln!(md, "| {} | {} |", r.case_name, outcome);
    }

    let failures: Vec<_> = results.iter().filter(|r| !r.passed).collect();
    if !failures.is_empty() {
        let _ = writeln!(md);
        let _ = writeln!(md, "## Failures");
        for r in failures {
            let _ = writeln!(md);
            let _ = writeln!(md, "### {}", r.case_name);
            let _ = writeln!(md);
            let _ = writeln!(md, "```");
            if let Some(diff) = &r.diff {
                let _ = writeln!(md, "{diff}");
            }
            let _ = writeln!(md, "```");
        }
    }

    (report, md)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, passed: bool) -> VerificationResult {
        VerificationResult {
            case_name: name.into(),
            passed,
            expected_stdout: String::new(),
            actual_stdout: String::new(),
            expected_returns: Vec::new(),
            actual_returns: Vec::new(),
            diff: if passed { None } else { Some("boom".into()) },
        }
    }

    #[test]
    fn test_report_counts_and_sections() {
        let results = vec![result("a", true), result("b", false)];
        let (report, md) = render_markdown("smoke", &results);
        assert_eq!(report.total, 2);
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed(), 1);
        assert!(!report.all_passed());
        assert!(md.contains("| a | pass |"));
        assert!(md.contains("| b | FAIL |"));
        assert!(md.contains("## Failures"));
        assert!(md.contains("boom"));
    }
}
