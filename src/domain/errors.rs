// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the properties configuration crate.
//!
//! This module defines the error types that can occur when loading or reading
//! `.properties` configuration. All errors use `thiserror` for proper error
//! handling and conversion.

use thiserror::Error;

/// The main error type for configuration operations.
///
/// This enum represents all possible errors that can occur when parsing a
/// properties stream or opening a properties file. It is marked as
/// `#[non_exhaustive]` to allow for future additions without breaking
/// backwards compatibility.
///
/// # Examples
///
/// ```
/// use propcfg::domain::errors::ConfigError;
///
/// let error = ConfigError::format_error(3, "NoDelimiterHere", "missing key/value delimiter '='");
/// assert!(error.to_string().contains("line 3"));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A line of the properties stream could not be split into a key and a value.
    #[error("Invalid properties format at line {line_number}: {message} (line: '{line}')")]
    FormatError {
        /// The 1-based line number of the offending line
        line_number: usize,
        /// The offending line, trimmed
        line: String,
        /// What is wrong with the line
        message: String,
    },

    /// An error occurred in a configuration source.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A provider was asked to load while not in the unloaded state.
    #[error("Provider cannot be loaded from state '{state}'")]
    InvalidState {
        /// The state the provider was in
        state: String,
    },

    /// An I/O error occurred while reading the source stream.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates a `FormatError` for the given line.
    pub fn format_error(
        line_number: usize,
        line: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ConfigError::FormatError {
            line_number,
            line: line.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if this error was caused by malformed properties content.
    pub fn is_format_error(&self) -> bool {
        matches!(self, ConfigError::FormatError { .. })
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
