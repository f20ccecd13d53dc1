//! E2E Scenario: Stats Workflow

use super::common;
use super::fixture::E2EFixture;

#[test]
fn test_stats_robot() {
    let fixture = E2EFixture::new("stats_robot");
    let index = fixture.write_index("search_index.js", common::SAMPLE_INDEX_JS);

    let output = fixture.run(&["--robot", "stats", index.to_str().unwrap()]);
    fixture.assert_success(&output, "stats");

    let json = output.json();
    let stats = &json["data"]["stats"];
    assert_eq!(json["data"]["format"], "js");
    assert_eq!(stats["records"], 7);
    assert_eq!(stats["pages"], 3);
    assert_eq!(stats["locations"], 7);
    assert_eq!(stats["categories"]["page"], 3);
    assert_eq!(stats["categories"]["section"], 4);
    assert_eq!(stats["empty_text"], 2);
}

#[test]
fn test_stats_top_pages() {
    let fixture = E2EFixture::new("stats_top");
    let index = fixture.write_index("search_index.js", common::SAMPLE_INDEX_JS);

    let output = fixture.run(&["--robot", "stats", index.to_str().unwrap(), "--top", "1"]);
    fixture.assert_success(&output, "stats --top 1");

    let json = output.json();
    let largest = json["data"]["stats"]["largest_pages"]
        .as_array()
        .expect("largest_pages");
    assert_eq!(largest.len(), 1);
    assert_eq!(largest[0]["page"], "Learning a Control Policy");
}

#[test]
fn test_stats_plain_output() {
    let fixture = E2EFixture::new("stats_plain");
    let index = fixture.write_index("search_index.js", common::SAMPLE_INDEX_JS);

    let output = fixture.run(&["--format", "plain", "stats", index.to_str().unwrap()]);
    fixture.assert_success(&output, "plain stats");
    assert!(output.stdout.contains("records\t7"));
    assert!(output.stdout.contains("category:page\t3"));
}
