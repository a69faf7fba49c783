// SPDX-License-Identifier: MIT OR Apache-2.0

//! Properties configuration provider.
//!
//! The provider loads one properties stream and then serves case-insensitive
//! lookups over the hierarchical key namespace. A provider is loaded at most
//! once; reading new content means constructing a new provider.

use crate::adapters::PropertiesParser;
use crate::domain::{ConfigError, ConfigKey, ConfigValue, ConfigurationMap, Result};
use crate::ports::ConfigSource;
use std::fmt;
use std::io::Read;

/// Lifecycle of a [`PropertiesConfigurationProvider`].
///
/// `Unloaded` moves to either `Loaded` or `Failed`; both are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// No load has been attempted yet.
    Unloaded,
    /// The stream was parsed and its entries are available.
    Loaded,
    /// The load failed; no entries are available.
    Failed,
}

impl fmt::Display for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoadState::Unloaded => "unloaded",
            LoadState::Loaded => "loaded",
            LoadState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Configuration source backed by a properties stream.
///
/// # Examples
///
/// ```rust
/// use propcfg::adapters::PropertiesConfigurationProvider;
///
/// let mut provider = PropertiesConfigurationProvider::new();
/// provider
///     .load("Data.Inventory.Provider=MySql\nDefaultKey=".as_bytes())
///     .unwrap();
///
/// assert_eq!(provider.try_get("DATA:INVENTORY:PROVIDER"), Some("MySql"));
/// assert_eq!(provider.try_get("DefaultKey"), Some(""));
/// assert_eq!(provider.try_get("Missing"), None);
/// ```
#[derive(Debug, Clone)]
pub struct PropertiesConfigurationProvider {
    state: LoadState,
    values: ConfigurationMap,
    parser: PropertiesParser,
}

impl PropertiesConfigurationProvider {
    /// Creates an unloaded provider.
    pub fn new() -> Self {
        Self {
            state: LoadState::Unloaded,
            values: ConfigurationMap::new(),
            parser: PropertiesParser::new(),
        }
    }

    /// Creates a provider and loads it from `reader`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut provider = Self::new();
        provider.load(reader)?;
        Ok(provider)
    }

    /// Creates a provider and loads it from in-memory text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use propcfg::adapters::PropertiesConfigurationProvider;
    ///
    /// let provider = PropertiesConfigurationProvider::from_str("Provider=\"SqlClient\"").unwrap();
    /// assert_eq!(provider.try_get("provider"), Some("SqlClient"));
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        Self::from_reader(content.as_bytes())
    }

    /// Loads the provider from a UTF-8 stream.
    ///
    /// The whole stream is parsed before any entry becomes visible. If a line is
    /// malformed or the stream cannot be read, the provider moves to
    /// [`LoadState::Failed`] and exposes no entries.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::InvalidState`] if the provider was already loaded or failed
    /// * [`ConfigError::FormatError`] if a line has no key/value delimiter
    /// * [`ConfigError::IoError`] if reading fails or the stream is not UTF-8
    pub fn load<R: Read>(&mut self, reader: R) -> Result<()> {
        if self.state != LoadState::Unloaded {
            return Err(ConfigError::InvalidState {
                state: self.state.to_string(),
            });
        }

        match self.parser.parse_reader(reader) {
            Ok(values) => {
                self.values = values;
                self.state = LoadState::Loaded;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to load properties: {}", e);
                self.state = LoadState::Failed;
                Err(e)
            }
        }
    }

    /// Looks up a value by hierarchical key, ignoring case.
    ///
    /// Returns `None` for unknown keys and for providers that are not loaded.
    pub fn try_get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(ConfigValue::as_str)
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Returns the number of loaded entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no entries are loaded.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the loaded keys in source order.
    pub fn keys(&self) -> impl Iterator<Item = &ConfigKey> {
        self.values.keys()
    }

    /// Returns the loaded entries.
    pub fn entries(&self) -> &ConfigurationMap {
        &self.values
    }
}

impl Default for PropertiesConfigurationProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSource for PropertiesConfigurationProvider {
    fn name(&self) -> &str {
        "properties"
    }

    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
        Ok(self.values.get_key(key).cloned())
    }

    fn all_keys(&self) -> Result<Vec<ConfigKey>> {
        Ok(self.values.keys().cloned().collect())
    }
}
