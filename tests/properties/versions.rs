//! Property tests for version argument parsing.

use proptest::prelude::*;

use mm_cli::versions::parse_version;
use mm_cli::Version;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing arbitrary input never panics.
    #[test]
    fn property_parse_version_never_panics(s in "(?s).{0,64}") {
        let _ = parse_version(&s);
    }

    /// PROPERTY: every u32 is accepted as itself.
    #[test]
    fn property_numbers_parse_to_themselves(n in any::<u32>()) {
        prop_assert_eq!(parse_version(&n.to_string()), Ok(Version::Number(n)));
    }

    /// PROPERTY: non-numeric words other than `latest` are rejected with the input quoted.
    #[test]
    fn property_words_are_rejected(s in "[a-zA-Z][a-zA-Z_-]{0,15}") {
        prop_assume!(s != "latest");
        let err = parse_version(&s).unwrap_err();
        prop_assert_eq!(
            err,
            format!("Invalid version: '{}'. Expected a number or 'latest'", s)
        );
    }

    /// PROPERTY: values past u32::MAX are rejected rather than wrapped.
    #[test]
    fn property_overflow_is_rejected(n in (u32::MAX as u64 + 1)..u64::MAX) {
        prop_assert!(parse_version(&n.to_string()).is_err());
    }
}
