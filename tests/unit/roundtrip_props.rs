//! Round-trip idempotence properties over generated indexes.
//!
//! Re-serializing and re-parsing a snapshot must be lossless in both wire
//! formats, and the canonical emitters must be fixed points.

use proptest::prelude::*;

use sidx::index::parser::{self, IndexFormat};
use sidx::index::{Category, SearchIndex, SearchRecord};

fn category() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Page),
        Just(Category::Section),
        "[a-z]{1,8}".prop_map(Category::from),
    ]
}

fn record() -> impl Strategy<Value = SearchRecord> {
    (".{0,32}", ".{0,24}", ".{0,24}", ".{0,64}", category()).prop_map(
        |(location, page, title, text, category)| SearchRecord {
            location,
            page,
            title,
            text,
            category,
        },
    )
}

fn index() -> impl Strategy<Value = SearchIndex> {
    prop::collection::vec(record(), 0..12).prop_map(|docs| SearchIndex { docs })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_js_round_trip(index in index()) {
        let emitted = parser::to_js_string(&index).unwrap();
        let (parsed, format) = parser::parse_str(&emitted).unwrap();
        prop_assert_eq!(format, IndexFormat::Js);
        prop_assert_eq!(&parsed, &index);
        prop_assert_eq!(parser::to_js_string(&parsed).unwrap(), emitted);
    }

    #[test]
    fn prop_json_round_trip(index in index()) {
        let emitted = parser::to_json_string(&index).unwrap();
        let (parsed, format) = parser::parse_str(&emitted).unwrap();
        prop_assert_eq!(format, IndexFormat::Json);
        prop_assert_eq!(&parsed, &index);
        prop_assert_eq!(parser::to_json_string(&parsed).unwrap(), emitted);
    }

    #[test]
    fn prop_order_preserved(index in index()) {
        let emitted = parser::to_js_string(&index).unwrap();
        let (parsed, _) = parser::parse_str(&emitted).unwrap();
        let original: Vec<&str> = index.docs.iter().map(|r| r.location.as_str()).collect();
        let round_tripped: Vec<&str> = parsed.docs.iter().map(|r| r.location.as_str()).collect();
        prop_assert_eq!(original, round_tripped);
    }
}
