// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests check that the properties provider behaves consistently for
//! arbitrary keys and values.

use propcfg::adapters::PropertiesConfigurationProvider;
use propcfg::domain::ConfigKey;
use proptest::prelude::*;

// Key segments: ASCII letters, digits and underscores
fn segment() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,8}"
}

fn dotted_key() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment(), 1..5)
}

// Values without quotes, newlines, or surrounding whitespace
fn plain_value() -> impl Strategy<Value = String> {
    "[A-Za-z0-9;=:,./_-]{0,20}"
}

// Test that every key is found regardless of the case used at lookup time
proptest! {
    #[test]
    fn test_lookup_ignores_case(segments in dotted_key(), value in plain_value()) {
        let content = format!("{}={}", segments.join("."), value);
        let provider = PropertiesConfigurationProvider::from_str(&content).unwrap();

        let lookup = segments.join(":");
        prop_assert_eq!(provider.try_get(&lookup), Some(value.as_str()));
        prop_assert_eq!(provider.try_get(&lookup.to_uppercase()), Some(value.as_str()));
        prop_assert_eq!(provider.try_get(&lookup.to_lowercase()), Some(value.as_str()));
    }
}

// Test that a value wrapped in quotes is stored without them
proptest! {
    #[test]
    fn test_quoted_value_roundtrip(value in plain_value()) {
        let content = format!("Key=\"{}\"", value);
        let provider = PropertiesConfigurationProvider::from_str(&content).unwrap();

        prop_assert_eq!(provider.try_get("key"), Some(value.as_str()));
    }
}

// Test that a leading quote without a partner is kept
proptest! {
    #[test]
    fn test_unpaired_quote_is_kept(value in "[A-Za-z0-9]{1,20}") {
        let content = format!("Key=\"{}", value);
        let provider = PropertiesConfigurationProvider::from_str(&content).unwrap();

        let expected = format!("\"{}", value);
        prop_assert_eq!(provider.try_get("Key"), Some(expected.as_str()));
    }
}

// Test that loading the same content twice gives the same lookups
proptest! {
    #[test]
    fn test_load_is_idempotent(
        entries in prop::collection::vec((dotted_key(), plain_value()), 0..10)
    ) {
        let content: String = entries
            .iter()
            .map(|(segments, value)| format!("{}={}\n", segments.join("."), value))
            .collect();

        let first = PropertiesConfigurationProvider::from_str(&content).unwrap();
        let second = PropertiesConfigurationProvider::from_str(&content).unwrap();

        prop_assert_eq!(first.len(), second.len());
        for (segments, _) in &entries {
            let key = segments.join(":");
            prop_assert_eq!(first.try_get(&key), second.try_get(&key));
        }
    }
}

// Test that comment lines never contribute entries
proptest! {
    #[test]
    fn test_comments_contribute_nothing(
        comment in "[^\r\n]{0,40}",
        segments in dotted_key(),
        value in plain_value()
    ) {
        let content = format!("# {}\n{}={}\n  #{}", comment, segments.join("."), value, comment);
        let provider = PropertiesConfigurationProvider::from_str(&content).unwrap();

        prop_assert_eq!(provider.len(), 1);
        prop_assert_eq!(provider.try_get(&segments.join(":")), Some(value.as_str()));
    }
}

// Test that lines without a delimiter always fail the load
proptest! {
    #[test]
    fn test_line_without_delimiter_fails(line in "[A-Za-z0-9 .]*[A-Za-z0-9.][A-Za-z0-9 .]*") {
        let content = format!("Good=1\n{}", line);
        prop_assert!(PropertiesConfigurationProvider::from_str(&content).is_err());
    }
}

// Test that ConfigKey equality follows case-insensitive comparison
proptest! {
    #[test]
    fn test_config_key_equality_ignores_case(segments in dotted_key()) {
        let key = segments.join(":");
        prop_assert_eq!(ConfigKey::from(key.to_uppercase()), ConfigKey::from(key.to_lowercase()));
        prop_assert_eq!(ConfigKey::from_dotted(&segments.join(".")), ConfigKey::from(key));
    }
}
