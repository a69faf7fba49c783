// SPDX-License-Identifier: MIT OR Apache-2.0

//! A hexagonal architecture `.properties` configuration crate.
//!
//! This crate parses `.properties`-style text into a flat map of hierarchical
//! keys and serves case-insensitive lookups over it.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`ConfigKey`, `ConfigValue`, `ConfigurationMap`, errors)
//! - **Ports**: Trait definitions that define interfaces (`ConfigParser`, `ConfigSource`)
//! - **Adapters**: The properties parser, provider and file adapter
//!
//! # Format
//!
//! - `# comment` lines and blank lines are ignored
//! - `key=value` lines are split on the first `=`
//! - dots in keys become `:` (`Data.Inventory.Provider` → `Data:Inventory:Provider`)
//! - a value wrapped in one pair of double quotes is unwrapped; other quotes are literal
//! - a line without `=` fails the whole load
//!
//! # Feature Flags
//!
//! - `file`: Enable `PropertiesFileAdapter` (default)
//!
//! # Quick Start
//!
//! ```rust
//! use propcfg::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let content = "# inventory database\nData.Inventory.Provider=\"MySql\"\n";
//!
//! let mut provider = PropertiesConfigurationProvider::new();
//! provider.load(content.as_bytes())?;
//!
//! assert_eq!(provider.try_get("DATA:INVENTORY:PROVIDER"), Some("MySql"));
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{LoadState, PropertiesConfigurationProvider, PropertiesParser};
    pub use crate::domain::{ConfigError, ConfigKey, ConfigValue, ConfigurationMap, Result};
    pub use crate::ports::{ConfigParser, ConfigSource};

    #[cfg(feature = "file")]
    pub use crate::adapters::PropertiesFileAdapter;
}
