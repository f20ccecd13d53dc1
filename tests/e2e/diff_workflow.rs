//! E2E Scenario: Diff Workflow
//!
//! Compares two releases of the same documentation corpus.

use super::common;
use super::fixture::E2EFixture;

#[test]
fn test_diff_identical_snapshots() {
    let fixture = E2EFixture::new("diff_identical");
    let a = fixture.write_index("a.js", common::SAMPLE_INDEX_JS);
    let b = fixture.write_index("b.js", common::SAMPLE_INDEX_JS);

    fixture.log_step("Diff a snapshot against itself");
    let output = fixture.run(&["--robot", "diff", a.to_str().unwrap(), b.to_str().unwrap()]);
    fixture.assert_success(&output, "diff");

    let json = output.json();
    assert_eq!(json["data"]["added"], 0);
    assert_eq!(json["data"]["removed"], 0);
    assert_eq!(json["data"]["unchanged"], 7);
}

#[test]
fn test_diff_detects_page_churn() {
    let fixture = E2EFixture::new("diff_churn");
    let old = fixture.write_index("v1.js", common::SAMPLE_INDEX_JS);
    let new = fixture.write_index("v2.js", common::SAMPLE_INDEX_V2_JS);

    fixture.log_step("Diff two releases");
    let output = fixture.run(&[
        "--robot",
        "diff",
        old.to_str().unwrap(),
        new.to_str().unwrap(),
    ]);
    fixture.assert_success(&output, "diff");

    let json = output.json();
    assert_eq!(json["data"]["added"], 1);
    assert_eq!(json["data"]["removed"], 2);
    assert_eq!(json["data"]["unchanged"], 5);

    let pages = json["data"]["pages"].as_array().expect("pages rollup");
    let plotting = pages
        .iter()
        .find(|p| p["page"] == "Plotting Results")
        .expect("plotting page delta");
    assert_eq!(plotting["status"], "added");
    let api = pages
        .iter()
        .find(|p| p["page"] == "API Reference")
        .expect("api page delta");
    assert_eq!(api["status"], "removed");
}

#[test]
fn test_diff_plain_markers() {
    let fixture = E2EFixture::new("diff_plain");
    let old = fixture.write_index("v1.js", common::SAMPLE_INDEX_JS);
    let new = fixture.write_index("v2.js", common::SAMPLE_INDEX_V2_JS);

    let output = fixture.run(&[
        "--format",
        "plain",
        "diff",
        old.to_str().unwrap(),
        new.to_str().unwrap(),
    ]);
    fixture.assert_success(&output, "plain diff");
    assert!(output.stdout.contains("+\ttutorials/plotting/#"));
    assert!(output.stdout.contains("-\tapi/#"));
}
