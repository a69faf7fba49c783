// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, which provides an interface for
//! parsing configuration text into a flat map of hierarchical keys.

use crate::domain::{ConfigurationMap, Result};

/// A trait for parsing configuration text.
///
/// Implementations turn the raw text of a configuration file into a flat
/// [`ConfigurationMap`] whose keys use `:` between segments. For example, the
/// properties line:
///
/// ```text
/// Data.Inventory.Provider=MySql
/// ```
///
/// Should be parsed into:
/// - `Data:Inventory:Provider` -> `"MySql"`
///
/// # Examples
///
/// ```rust
/// use propcfg::ports::ConfigParser;
/// use propcfg::domain::{ConfigurationMap, Result};
///
/// struct MyParser;
///
/// impl ConfigParser for MyParser {
///     fn parse(&self, content: &str) -> Result<ConfigurationMap> {
///         Ok(ConfigurationMap::new())
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["myformat"]
///     }
/// }
/// ```
pub trait ConfigParser {
    /// Parses configuration content into a flat key-value map.
    ///
    /// # Returns
    ///
    /// * `Ok(ConfigurationMap)` - The parsed entries
    /// * `Err(ConfigError)` - The content is malformed
    fn parse(&self, content: &str) -> Result<ConfigurationMap>;

    /// Returns the file extensions (without the leading dot) this parser supports.
    fn supported_extensions(&self) -> &[&str];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConfigKey, ConfigValue};

    struct FixedParser;

    impl ConfigParser for FixedParser {
        fn parse(&self, _content: &str) -> Result<ConfigurationMap> {
            let mut map = ConfigurationMap::new();
            map.insert(ConfigKey::from("Data:Provider"), ConfigValue::from("MySql"));
            Ok(map)
        }

        fn supported_extensions(&self) -> &[&str] {
            &["fixed", "fx"]
        }
    }

    #[test]
    fn test_parser_parse() {
        let parser = FixedParser;
        let result = parser.parse("ignored").unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.get("data:provider").unwrap().as_str(), "MySql");
    }

    #[test]
    fn test_parser_supported_extensions() {
        let parser = FixedParser;
        assert_eq!(parser.supported_extensions(), &["fixed", "fx"]);
    }

    #[test]
    fn test_parser_is_object_safe() {
        let parser: Box<dyn ConfigParser> = Box::new(FixedParser);
        assert!(parser.parse("").is_ok());
    }
}
