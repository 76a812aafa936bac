//! Property tests for `SRC[,SRC...]=PATH` output mappings.

use std::path::PathBuf;

use proptest::prelude::*;

use mm_cli::engine::{OutputMapping, OutputSource};

fn source() -> impl Strategy<Value = OutputSource> {
    prop_oneof![
        Just(OutputSource::BotA),
        Just(OutputSource::BotB),
        Just(OutputSource::Gamelog),
    ]
}

fn relative_path() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[A-Za-z0-9._-]{1,12}").unwrap();
    proptest::collection::vec(segment, 1..=3).prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing arbitrary input never panics.
    #[test]
    fn property_mapping_parse_never_panics(s in "(?s).{0,128}") {
        let _ = s.parse::<OutputMapping>();
    }

    /// PROPERTY: a well-formed mapping keeps its sources in order and its path verbatim.
    #[test]
    fn property_well_formed_mapping_parses(
        sources in proptest::collection::vec(source(), 1..=3),
        path in relative_path(),
    ) {
        let names: Vec<&str> = sources.iter().map(|s| s.as_str()).collect();
        let text = format!("{}={}", names.join(","), path);

        let mapping: OutputMapping = text.parse().unwrap();
        prop_assert_eq!(mapping.sources, sources);
        prop_assert_eq!(mapping.path, PathBuf::from(path));
    }

    /// PROPERTY: a mapping without `=` is always rejected.
    #[test]
    fn property_mapping_requires_separator(s in "[a-z,-]{0,32}") {
        prop_assert!(s.parse::<OutputMapping>().is_err());
    }
}
