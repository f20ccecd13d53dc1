//! E2E Scenario: List Workflow

use super::common;
use super::fixture::E2EFixture;

#[test]
fn test_list_pages_robot() {
    let fixture = E2EFixture::new("list_pages");
    let index = fixture.write_index("search_index.js", common::SAMPLE_INDEX_JS);

    let output = fixture.run(&["--robot", "list", index.to_str().unwrap()]);
    fixture.assert_success(&output, "list");

    let json = output.json();
    assert_eq!(json["data"]["count"], 3);

    let pages: Vec<&str> = json["data"]["pages"]
        .as_array()
        .expect("pages array")
        .iter()
        .map(|p| p["page"].as_str().expect("page name"))
        .collect();
    assert_eq!(
        pages,
        vec![
            "API Reference",
            "Learning a Control Policy",
            "Simulated Environments"
        ],
        "default sort is by name"
    );
}

#[test]
fn test_list_sort_by_records() {
    let fixture = E2EFixture::new("list_sort_records");
    let index = fixture.write_index("search_index.js", common::SAMPLE_INDEX_JS);

    let output = fixture.run(&[
        "--robot",
        "list",
        index.to_str().unwrap(),
        "--sort",
        "records",
    ]);
    fixture.assert_success(&output, "list sorted by records");

    let json = output.json();
    assert_eq!(
        json["data"]["pages"][0]["page"],
        "Learning a Control Policy"
    );
    assert_eq!(json["data"]["pages"][0]["records"], 3);
}

#[test]
fn test_list_plain_output() {
    let fixture = E2EFixture::new("list_plain");
    let index = fixture.write_index("search_index.js", common::SAMPLE_INDEX_JS);

    let output = fixture.run(&["--format", "plain", "list", index.to_str().unwrap()]);
    fixture.assert_success(&output, "plain list");

    let lines: Vec<&str> = output.stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("API Reference\t2\t1\tapi/"));
    assert!(!output.stdout.contains('\x1b'), "plain output must have no ANSI");
}
