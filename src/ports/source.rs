// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration source trait definition.
//!
//! This module defines the `ConfigSource` trait, the read-only port through which
//! callers look up loaded configuration values. Sources never mutate after they
//! are loaded; picking up new content means building a new source.

use crate::domain::{ConfigKey, ConfigValue, Result};

/// A trait for read-only configuration sources.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`. A loaded source is immutable, so it
/// may be shared between readers without locking.
///
/// # Examples
///
/// ```rust
/// use propcfg::ports::ConfigSource;
/// use propcfg::domain::{ConfigKey, ConfigValue, Result};
///
/// struct MySource;
///
/// impl ConfigSource for MySource {
///     fn name(&self) -> &str {
///         "my-source"
///     }
///
///     fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
///         Ok(None)
///     }
///
///     fn all_keys(&self) -> Result<Vec<ConfigKey>> {
///         Ok(vec![])
///     }
/// }
/// ```
pub trait ConfigSource: Send + Sync {
    /// Returns the name of this configuration source.
    ///
    /// This name is used for logging and error messages.
    fn name(&self) -> &str;

    /// Retrieves a configuration value for the given key.
    ///
    /// Keys are matched case-insensitively against the `:`-delimited namespace.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(ConfigValue))` - The value was found
    /// * `Ok(None)` - The key does not exist in this source
    /// * `Err(ConfigError)` - An error occurred
    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>>;

    /// Returns all configuration keys available in this source.
    fn all_keys(&self) -> Result<Vec<ConfigKey>>;

    /// Retrieves a configuration value for the given key string.
    ///
    /// Equivalent to calling `get(&ConfigKey::from(key))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use propcfg::ports::ConfigSource;
    /// # use propcfg::domain::{ConfigKey, ConfigValue, Result};
    /// # struct MySource;
    /// # impl ConfigSource for MySource {
    /// #     fn name(&self) -> &str { "my-source" }
    /// #     fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
    /// #         if *key == ConfigKey::from("App:Name") {
    /// #             Ok(Some(ConfigValue::from("MyApp")))
    /// #         } else {
    /// #             Ok(None)
    /// #         }
    /// #     }
    /// #     fn all_keys(&self) -> Result<Vec<ConfigKey>> { Ok(vec![]) }
    /// # }
    /// let source = MySource;
    /// let value = source.get_str("APP:NAME").unwrap();
    /// assert_eq!(value.unwrap().as_str(), "MyApp");
    /// ```
    fn get_str(&self, key: &str) -> Result<Option<ConfigValue>> {
        self.get(&ConfigKey::from(key))
    }
}
