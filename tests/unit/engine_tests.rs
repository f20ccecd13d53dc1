//! Query engine behavior over a small in-memory corpus.

use sidx::config::SearchConfig;
use sidx::index::{Category, SearchIndex, SearchRecord};
use sidx::search::{SearchEngine, SearchOptions};

fn record(page: &str, title: &str, text: &str, category: Category) -> SearchRecord {
    SearchRecord {
        location: format!(
            "{}/#{}",
            page.to_lowercase().replace(' ', "-"),
            title.replace(' ', "-")
        ),
        page: page.to_string(),
        title: title.to_string(),
        text: text.to_string(),
        category,
    }
}

fn engine() -> SearchEngine {
    let index = SearchIndex {
        docs: vec![
            record(
                "Control Tutorial",
                "Control Tutorial",
                "We train a policy with a natural policy gradient method on a simulated hopper.",
                Category::Page,
            ),
            record(
                "Control Tutorial",
                "Hyperparameters",
                "The step size and batch size both matter for stable training.",
                Category::Section,
            ),
            record(
                "Environments",
                "Environments",
                "Each environment exposes reset and step operations over the physics state.",
                Category::Page,
            ),
            record(
                "Environments",
                "Finite Differences",
                "Finite differences are used to verify the gradient of the dynamics.",
                Category::Section,
            ),
        ],
    };
    SearchEngine::build(index, &SearchConfig::default())
}

#[test]
fn test_keyword_search_ranks_dense_match_first() {
    let engine = engine();
    let hits = engine.search("policy gradient", &SearchOptions::default());
    assert!(!hits.is_empty());
    assert_eq!(hits[0].page, "Control Tutorial");
    assert_eq!(hits[0].title, "Control Tutorial");
}

#[test]
fn test_title_match_outranks_body_match() {
    let engine = engine();
    let hits = engine.search("environments", &SearchOptions::default());
    assert!(!hits.is_empty());
    assert_eq!(hits[0].title, "Environments");
}

#[test]
fn test_phrase_search_exact_substring() {
    let engine = engine();
    let hits = engine.search("\"natural policy gradient\"", &SearchOptions::default());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].page, "Control Tutorial");
    assert!(hits[0].snippet.contains("natural policy gradient"));
}

#[test]
fn test_mixed_query_fuses_rankings() {
    let engine = engine();
    // "gradient" matches two records; the phrase pins the tutorial record.
    let hits = engine.search("gradient \"simulated hopper\"", &SearchOptions::default());
    assert!(!hits.is_empty());
    assert_eq!(hits[0].title, "Control Tutorial");
}

#[test]
fn test_category_filter() {
    let engine = engine();
    let options = SearchOptions {
        category: Some(Category::Section),
        ..SearchOptions::default()
    };
    let hits = engine.search("gradient", &options);
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|hit| hit.category == "section"));
}

#[test]
fn test_page_filter_is_case_insensitive() {
    let engine = engine();
    let options = SearchOptions {
        page: Some("environments".to_string()),
        ..SearchOptions::default()
    };
    let hits = engine.search("step", &options);
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|hit| hit.page == "Environments"));
}

#[test]
fn test_limit_zero_and_empty_query() {
    let engine = engine();
    let options = SearchOptions {
        limit: Some(0),
        ..SearchOptions::default()
    };
    assert!(engine.search("gradient", &options).is_empty());
    assert!(engine.search("", &SearchOptions::default()).is_empty());
    assert!(engine.search("the of and", &SearchOptions::default()).is_empty());
}

#[test]
fn test_limit_truncates() {
    let engine = engine();
    let options = SearchOptions {
        limit: Some(1),
        ..SearchOptions::default()
    };
    assert_eq!(engine.search("gradient", &options).len(), 1);
}

#[test]
fn test_phrase_longer_than_any_text() {
    let engine = engine();
    let long_phrase = format!("\"{}\"", "word ".repeat(100));
    assert!(engine.search(&long_phrase, &SearchOptions::default()).is_empty());
}

#[test]
fn test_empty_index_searches_empty() {
    let engine = SearchEngine::build(SearchIndex::default(), &SearchConfig::default());
    assert!(engine.search("anything", &SearchOptions::default()).is_empty());
}

#[test]
fn test_scores_are_descending() {
    let engine = engine();
    let hits = engine.search("gradient step", &SearchOptions::default());
    for pair in hits.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}
