//! Runs the shipped conformance suite through the in-process runner.

use walrus_rt_harness::report::render_markdown;
use walrus_rt_harness::{FixtureSet, TestRunner};

const RUNTIME_IO_SUITE: &str = include_str!("../fixtures/runtime_io.json");

#[test]
fn test_shipped_suite_parses() {
    let set = FixtureSet::from_json(RUNTIME_IO_SUITE).unwrap();
    assert_eq!(set.suite, "runtime_io");
    assert!(!set.cases.is_empty());
}

#[test]
fn test_shipped_suite_passes() {
    let set = FixtureSet::from_json(RUNTIME_IO_SUITE).unwrap();
    let results = TestRunner::new(set.suite.clone()).run(&set);
    let failures: Vec<_> = results
        .iter()
        .filter(|r| !r.passed)
        .map(|r| (r.case_name.clone(), r.diff.clone()))
        .collect();
    assert!(failures.is_empty(), "failing cases: {failures:?}");
}

#[test]
fn test_shipped_suite_report_is_clean() {
    let set = FixtureSet::from_json(RUNTIME_IO_SUITE).unwrap();
    let results = TestRunner::new(set.suite.clone()).run(&set);
    let (summary, md) = render_markdown("runtime_io", &results);
    assert!(summary.all_passed());
    assert!(!md.contains("## Failures"));
}

#[test]
fn test_fixture_round_trips_through_json() {
    let set = FixtureSet::from_json(RUNTIME_IO_SUITE).unwrap();
    let rendered = set.to_json().unwrap();
    let back = FixtureSet::from_json(&rendered).unwrap();
    assert_eq!(back.cases.len(), set.cases.len());
}
