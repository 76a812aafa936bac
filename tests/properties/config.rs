//! Property tests for config environment overrides.

use proptest::prelude::*;

use mm_cli::config::{apply_env_overrides, Config, Lang};

fn lang() -> impl Strategy<Value = Lang> {
    prop_oneof![Just(Lang::Rust), Just(Lang::Python), Just(Lang::Java)]
}

fn base_url() -> impl Strategy<Value = String> {
    proptest::string::string_regex("https?://[a-z]{1,12}(:[0-9]{2,5})?(/[a-z]{1,8}){0,2}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the resolved API url never ends in a slash.
    #[test]
    fn property_api_url_has_no_trailing_slash(
        url in base_url(),
        slashes in 0usize..4,
        from_env in any::<bool>(),
    ) {
        let raw = format!("{}{}", url, "/".repeat(slashes));
        let config = Config {
            language: Lang::Python,
            api_url: if from_env { "http://file".to_string() } else { raw.clone() },
        };

        let resolved = apply_env_overrides(config, |key| {
            (from_env && key == "MM_API_URL").then(|| raw.clone())
        });

        prop_assert!(!resolved.api_url.ends_with('/'));
        prop_assert_eq!(resolved.api_url, url);
    }

    /// PROPERTY: MM_LANGUAGE is case-insensitive and wins over the file.
    #[test]
    fn property_language_override_ignores_case(
        file_lang in lang(),
        env_lang in lang(),
        upper in any::<bool>(),
    ) {
        let value = if upper {
            env_lang.as_str().to_uppercase()
        } else {
            env_lang.as_str().to_string()
        };
        let config = Config {
            language: file_lang,
            api_url: "http://x".to_string(),
        };

        let resolved = apply_env_overrides(config, |key| {
            (key == "MM_LANGUAGE").then(|| value.clone())
        });

        prop_assert_eq!(resolved.language, env_lang);
    }
}
