//! E2E Scenario: Fmt Workflow
//!
//! Canonical re-emission must be idempotent, and conversion between wire
//! formats must preserve the record sequence.

use super::common;
use super::fixture::E2EFixture;

#[test]
fn test_fmt_is_idempotent() {
    let fixture = E2EFixture::new("fmt_idempotent");
    let index = fixture.write_index("search_index.js", common::SAMPLE_INDEX_JS);
    let first = fixture.path().join("once.js");
    let second = fixture.path().join("twice.js");

    fixture.log_step("Format once");
    let output = fixture.run(&[
        "fmt",
        index.to_str().unwrap(),
        "--output",
        first.to_str().unwrap(),
    ]);
    fixture.assert_success(&output, "first fmt");

    fixture.log_step("Format the formatted output");
    let output = fixture.run(&[
        "fmt",
        first.to_str().unwrap(),
        "--output",
        second.to_str().unwrap(),
    ]);
    fixture.assert_success(&output, "second fmt");

    let once = std::fs::read(&first).expect("read once.js");
    let twice = std::fs::read(&second).expect("read twice.js");
    assert_eq!(once, twice, "fmt must be a fixed point");
}

#[test]
fn test_fmt_converts_js_to_json() {
    let fixture = E2EFixture::new("fmt_convert");
    let index = fixture.write_index("search_index.js", common::SAMPLE_INDEX_JS);
    let json_path = fixture.path().join("search_index.json");

    let output = fixture.run(&[
        "--robot",
        "fmt",
        index.to_str().unwrap(),
        "--to",
        "json",
        "--output",
        json_path.to_str().unwrap(),
    ]);
    fixture.assert_success(&output, "fmt to json");
    assert_eq!(output.json()["data"]["format"], "json");
    assert_eq!(output.json()["data"]["records"], 7);

    let converted = std::fs::read_to_string(&json_path).expect("read converted");
    assert!(converted.starts_with('{'));

    fixture.log_step("Converted file validates clean");
    let output = fixture.run(&["--robot", "validate", json_path.to_str().unwrap()]);
    fixture.assert_success(&output, "validate converted json");
}

#[test]
fn test_fmt_stdout_acts_as_filter() {
    let fixture = E2EFixture::new("fmt_stdout");
    let index = fixture.write_index("search_index.js", common::SAMPLE_INDEX_JS);

    let output = fixture.run(&["fmt", index.to_str().unwrap()]);
    fixture.assert_success(&output, "fmt to stdout");
    assert!(output.stdout.starts_with("var documenterSearchIndex = {"));
    assert!(output.stdout.ends_with('\n'));
}
