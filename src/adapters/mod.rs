// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing the properties implementations.
//!
//! This module contains the concrete implementations of the traits defined in the
//! ports layer: the properties parser, the stream-backed provider, and the
//! optional file adapter.

#[cfg(feature = "file")]
pub mod properties_file;
pub mod properties_parser;
pub mod properties_provider;

#[cfg(feature = "file")]
pub use properties_file::PropertiesFileAdapter;
pub use properties_parser::PropertiesParser;
pub use properties_provider::{LoadState, PropertiesConfigurationProvider};
