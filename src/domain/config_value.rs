// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value type.
//!
//! Properties values are always strings. `ConfigValue` wraps the string so that
//! sources return a uniform, self-documenting type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A configuration value as read from a properties source.
///
/// # Examples
///
/// ```
/// use propcfg::domain::config_value::ConfigValue;
///
/// let value = ConfigValue::new("SqlClient".to_string());
/// assert_eq!(value.as_str(), "SqlClient");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigValue(String);

impl ConfigValue {
    /// Creates a new `ConfigValue` from a `String`.
    pub fn new(value: String) -> Self {
        ConfigValue(value)
    }

    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns an owned copy of the value.
    pub fn as_string(&self) -> String {
        self.0.clone()
    }

    /// Converts the `ConfigValue` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns `true` if the value is the empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use propcfg::domain::config_value::ConfigValue;
    ///
    /// assert!(ConfigValue::from("").is_empty());
    /// assert!(!ConfigValue::from("x").is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue(s.to_string())
    }
}

impl From<ConfigValue> for String {
    fn from(value: ConfigValue) -> Self {
        value.0
    }
}

impl AsRef<str> for ConfigValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
