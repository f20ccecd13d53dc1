//! Config loading, merging, and defaults.

use sidx::config::{Config, ConfigPatch};

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.search.limit, 10);
    assert!((config.search.title_boost - 2.0).abs() < f32::EPSILON);
    assert!((config.search.rrf_k - 60.0).abs() < f32::EPSILON);
    assert_eq!(config.search.min_token_len, 2);
    assert!(config.search.stopwords);
    assert_eq!(config.search.snippet_width, 160);
    assert!(config.cache.enabled);
    assert_eq!(config.cache.query_cache_size, 128);
    assert_eq!(config.output.format, "human");
}

#[test]
fn test_patch_merges_over_defaults() {
    let patch: ConfigPatch = toml::from_str(
        r#"
        [search]
        limit = 25
        stopwords = false

        [cache]
        enabled = false
        "#,
    )
    .unwrap();

    let mut config = Config::default();
    config.merge_patch(patch);

    assert_eq!(config.search.limit, 25);
    assert!(!config.search.stopwords);
    assert!(!config.cache.enabled);
    // Untouched fields keep their defaults.
    assert_eq!(config.search.snippet_width, 160);
    assert_eq!(config.cache.query_cache_size, 128);
}

#[test]
fn test_empty_patch_is_noop() {
    let patch: ConfigPatch = toml::from_str("").unwrap();
    let mut config = Config::default();
    config.merge_patch(patch);
    assert_eq!(config.search.limit, 10);
}

#[test]
fn test_load_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[output]\nformat = \"jsonl\"\n").unwrap();

    let config = Config::load(Some(path.as_path())).unwrap();
    assert_eq!(config.output.format, "jsonl");
}

#[test]
fn test_load_missing_explicit_path_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let absent = dir.path().join("absent.toml");
    let config = Config::load(Some(absent.as_path())).unwrap();
    assert_eq!(config.search.limit, 10);
}

#[test]
fn test_load_bad_toml_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "not = [valid").unwrap();

    let err = Config::load(Some(path.as_path())).unwrap_err();
    assert!(err.to_string().contains("config.toml"));
}
