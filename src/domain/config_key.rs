// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hierarchical configuration key type.
//!
//! This module provides the `ConfigKey` type, a wrapper around `String` that
//! represents a configuration path made of segments joined by [`KEY_DELIMITER`].
//! Keys keep the casing they were written with but compare and hash
//! case-insensitively.

use std::fmt;
use std::hash::{Hash, Hasher};

/// The delimiter separating the segments of a hierarchical key.
pub const KEY_DELIMITER: char = ':';

/// The segment delimiter used by keys in properties files.
pub const SOURCE_KEY_DELIMITER: char = '.';

/// A hierarchical, case-insensitive configuration key.
///
/// `ConfigKey` stores the key exactly as given, together with a case-folded
/// copy used for equality and hashing. Two keys are equal when they match
/// irrespective of letter case in any segment.
///
/// # Examples
///
/// ```
/// use propcfg::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::from_dotted("Data.Inventory.Provider");
///
/// assert_eq!(key.as_str(), "Data:Inventory:Provider");
/// assert_eq!(key, ConfigKey::from("DATA:INVENTORY:PROVIDER"));
/// ```
#[derive(Clone)]
pub struct ConfigKey {
    key: String,
    folded: String,
}

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String` without rewriting delimiters.
    ///
    /// # Examples
    ///
    /// ```
    /// use propcfg::domain::config_key::ConfigKey;
    ///
    /// let key = ConfigKey::new("App:Name".to_string());
    /// assert_eq!(key.as_str(), "App:Name");
    /// ```
    pub fn new(key: String) -> Self {
        let folded = fold_case(&key);
        ConfigKey { key, folded }
    }

    /// Creates a `ConfigKey` from a dot-delimited source key.
    ///
    /// Every `.` is rewritten to `:`. Casing and segment order are preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use propcfg::domain::config_key::ConfigKey;
    ///
    /// let key = ConfigKey::from_dotted("DefaultConnection.ConnectionString");
    /// assert_eq!(key.as_str(), "DefaultConnection:ConnectionString");
    /// ```
    pub fn from_dotted(raw: &str) -> Self {
        Self::new(raw.replace(SOURCE_KEY_DELIMITER, &KEY_DELIMITER.to_string()))
    }

    /// Returns the key as a string slice, in its original casing.
    pub fn as_str(&self) -> &str {
        &self.key
    }

    /// Returns the case-folded form used for comparisons.
    pub fn folded(&self) -> &str {
        &self.folded
    }

    /// Iterates over the segments of the key, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use propcfg::domain::config_key::ConfigKey;
    ///
    /// let key = ConfigKey::from("Data:Inventory:Provider");
    /// let segments: Vec<&str> = key.segments().collect();
    /// assert_eq!(segments, vec!["Data", "Inventory", "Provider"]);
    /// ```
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.key.split(KEY_DELIMITER)
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.key
    }
}

/// Folds a key to the form used for case-insensitive comparison.
///
/// Folding is per character, so the result does not depend on a character's
/// position in the word (`Σ` always folds to `σ`, never to final `ς`).
pub(crate) fn fold_case(key: &str) -> String {
    key.chars()
        .flat_map(char::to_uppercase)
        .flat_map(char::to_lowercase)
        .collect()
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey::new(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey::new(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.key
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.key
    }
}

impl PartialEq for ConfigKey {
    fn eq(&self, other: &Self) -> bool {
        self.folded == other.folded
    }
}

impl Eq for ConfigKey {}

impl Hash for ConfigKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.folded.hash(state);
    }
}

impl fmt::Debug for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConfigKey").field(&self.key).finish()
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}
