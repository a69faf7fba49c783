// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module contains the core domain types for the properties configuration
//! crate. It is independent of any I/O concerns and defines the key, value and
//! map types used throughout the library.

pub mod config_key;
pub mod config_map;
pub mod config_value;
pub mod errors;

// Re-export commonly used types
pub use config_key::{ConfigKey, KEY_DELIMITER};
pub use config_map::ConfigurationMap;
pub use config_value::ConfigValue;
pub use errors::{ConfigError, Result};
