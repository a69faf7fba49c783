// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flat, ordered, case-insensitive map of configuration entries.

use crate::domain::config_key::fold_case;
use crate::domain::{ConfigKey, ConfigValue};
use std::collections::HashMap;

/// An insertion-ordered map from hierarchical keys to values.
///
/// Keys are matched case-insensitively on insert and on lookup. Inserting a key
/// that already exists under any casing replaces its value in place (last write
/// wins) and adopts the casing of the newer key.
///
/// # Examples
///
/// ```
/// use propcfg::domain::{ConfigKey, ConfigValue, ConfigurationMap};
///
/// let mut map = ConfigurationMap::new();
/// map.insert(ConfigKey::from("Key"), ConfigValue::from("1"));
/// map.insert(ConfigKey::from("KEY"), ConfigValue::from("2"));
///
/// assert_eq!(map.len(), 1);
/// assert_eq!(map.get("key").map(|v| v.as_str()), Some("2"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ConfigurationMap {
    entries: Vec<(ConfigKey, ConfigValue)>,
    index: HashMap<String, usize>,
}

impl ConfigurationMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, returning the value it replaced, if any.
    pub fn insert(&mut self, key: ConfigKey, value: ConfigValue) -> Option<ConfigValue> {
        if let Some(&position) = self.index.get(key.folded()) {
            let slot = &mut self.entries[position];
            slot.0 = key;
            return Some(std::mem::replace(&mut slot.1, value));
        }

        self.index
            .insert(key.folded().to_string(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Looks up a value by key string, ignoring case.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.index
            .get(&fold_case(key))
            .map(|&position| &self.entries[position].1)
    }

    /// Looks up a value by `ConfigKey`.
    pub fn get_key(&self, key: &ConfigKey) -> Option<&ConfigValue> {
        self.index
            .get(key.folded())
            .map(|&position| &self.entries[position].1)
    }

    /// Returns `true` if the map holds the key under any casing.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the keys in first-insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &ConfigKey> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Iterates over the entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ConfigKey, &ConfigValue)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }
}
