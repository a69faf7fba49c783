// SPDX-License-Identifier: MIT OR Apache-2.0

//! Properties file configuration source adapter.
//!
//! This module provides an adapter that opens a `.properties` file and hands the
//! resulting stream to a [`PropertiesConfigurationProvider`].

use crate::adapters::PropertiesConfigurationProvider;
use crate::domain::{ConfigError, ConfigKey, ConfigValue, Result};
use crate::ports::ConfigSource;
use directories::ProjectDirs;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// Maximum allowed file size for properties files (10MB)
const MAX_PROPERTIES_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// File name used by [`PropertiesFileAdapter::from_default_location`].
pub const DEFAULT_FILE_NAME: &str = "config.properties";

const SOURCE_NAME: &str = "properties-file";

/// Configuration source adapter for properties files.
///
/// # Examples
///
/// ```rust,no_run
/// use propcfg::adapters::PropertiesFileAdapter;
/// use propcfg::ports::ConfigSource;
///
/// // Load from a specific file
/// let adapter = PropertiesFileAdapter::from_file("/etc/myapp/app.properties").unwrap();
///
/// // Load from default OS location
/// let adapter = PropertiesFileAdapter::from_default_location("myapp", "com.example").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct PropertiesFileAdapter {
    /// Path to the properties file
    file_path: PathBuf,
    /// Provider holding the loaded entries
    provider: PropertiesConfigurationProvider,
}

impl PropertiesFileAdapter {
    /// Creates a new adapter by loading the file at `path`.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::SourceError`] if the path cannot be resolved, the file is
    ///   too large, or it cannot be opened
    /// * [`ConfigError::FormatError`] if a line of the file is malformed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref();

        // Resolve symlinks and relative components so file_path() is absolute
        let canonical_path = file_path
            .canonicalize()
            .map_err(|e| source_error("Invalid or inaccessible path", file_path, e))?;

        let file = open_checked(&canonical_path)?;
        let provider = PropertiesConfigurationProvider::from_reader(file)?;

        Ok(Self {
            file_path: canonical_path,
            provider,
        })
    }

    /// Creates a new adapter, treating a missing file as empty configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use propcfg::adapters::PropertiesFileAdapter;
    ///
    /// let adapter = PropertiesFileAdapter::optional("/nonexistent/app.properties").unwrap();
    /// assert!(adapter.provider().is_empty());
    /// ```
    pub fn optional<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref();
        if file_path.exists() {
            return Self::from_file(file_path);
        }

        tracing::debug!(
            "Optional properties file not found: {}",
            file_name(file_path)
        );
        Ok(Self {
            file_path: file_path.to_path_buf(),
            provider: PropertiesConfigurationProvider::from_reader(io::empty())?,
        })
    }

    /// Creates a new adapter from `config.properties` in the OS configuration directory.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, DEFAULT_FILE_NAME)
    }

    /// Creates a new adapter with a custom file name in the default location.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use propcfg::adapters::PropertiesFileAdapter;
    ///
    /// let adapter =
    ///     PropertiesFileAdapter::with_filename("myapp", "com.example", "db.properties").unwrap();
    /// ```
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::SourceError {
                source_name: SOURCE_NAME.to_string(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;

        Self::from_file(proj_dirs.config_dir().join(filename))
    }

    /// Returns the path to the configuration file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Returns the provider holding the loaded entries.
    pub fn provider(&self) -> &PropertiesConfigurationProvider {
        &self.provider
    }
}

impl ConfigSource for PropertiesFileAdapter {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    fn get(&self, key: &ConfigKey) -> Result<Option<ConfigValue>> {
        self.provider.get(key)
    }

    fn all_keys(&self) -> Result<Vec<ConfigKey>> {
        self.provider.all_keys()
    }
}

/// Opens `path` after checking its size against the limit.
fn open_checked(path: &Path) -> Result<File> {
    let metadata =
        fs::metadata(path).map_err(|e| source_error("Failed to read file metadata", path, e))?;

    if metadata.len() > MAX_PROPERTIES_FILE_SIZE {
        return Err(ConfigError::SourceError {
            source_name: SOURCE_NAME.to_string(),
            message: format!(
                "Configuration file too large: {} bytes (max {} bytes)",
                metadata.len(),
                MAX_PROPERTIES_FILE_SIZE
            ),
            source: None,
        });
    }

    File::open(path).map_err(|e| source_error("Failed to open configuration file", path, e))
}

fn source_error(message: &str, path: &Path, error: io::Error) -> ConfigError {
    ConfigError::SourceError {
        source_name: SOURCE_NAME.to_string(),
        message: format!("{}: {}", message, file_name(path)),
        source: Some(Box::new(error)),
    }
}

fn file_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_properties_adapter_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "# database\nData.Inventory.Provider=MySql").unwrap();

        let adapter = PropertiesFileAdapter::from_file(temp_file.path()).unwrap();

        assert_eq!(adapter.name(), "properties-file");
        let value = adapter.get_str("data:inventory:provider").unwrap();
        assert_eq!(value.unwrap().as_str(), "MySql");
    }

    #[test]
    fn test_properties_adapter_all_keys() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "key1=value1\nkey2=value2").unwrap();

        let adapter = PropertiesFileAdapter::from_file(temp_file.path()).unwrap();
        let keys = adapter.all_keys().unwrap();

        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&ConfigKey::from("KEY1")));
        assert!(keys.contains(&ConfigKey::from("key2")));
    }

    #[test]
    fn test_properties_adapter_file_path() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "key=value").unwrap();

        let adapter = PropertiesFileAdapter::from_file(temp_file.path()).unwrap();
        assert_eq!(
            adapter.file_path(),
            temp_file.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_properties_adapter_malformed_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "key=value\nnot a pair").unwrap();

        let result = PropertiesFileAdapter::from_file(temp_file.path());
        assert!(matches!(
            result,
            Err(ConfigError::FormatError { line_number: 2, .. })
        ));
    }

    #[test]
    fn test_properties_adapter_nonexistent_file() {
        let result = PropertiesFileAdapter::from_file("/nonexistent/path/to/app.properties");
        assert!(matches!(result, Err(ConfigError::SourceError { .. })));
    }

    #[test]
    fn test_properties_adapter_optional_missing_file() {
        let adapter = PropertiesFileAdapter::optional("/nonexistent/path/to/app.properties").unwrap();
        assert!(adapter.provider().is_empty());
        assert!(adapter.get_str("anything").unwrap().is_none());
    }

    #[test]
    fn test_properties_adapter_optional_existing_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "Provider=\"SqlClient\"").unwrap();

        let adapter = PropertiesFileAdapter::optional(temp_file.path()).unwrap();
        assert_eq!(adapter.provider().try_get("provider"), Some("SqlClient"));
    }
}
