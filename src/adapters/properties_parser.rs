// SPDX-License-Identifier: MIT OR Apache-2.0

//! Properties parser.
//!
//! This module turns `.properties` text into a flat [`ConfigurationMap`]. The
//! format is line oriented:
//!
//! ```text
//! # comment lines start with '#'
//! Data.Inventory.Provider=MySql
//! Data.Inventory.ConnectionString="Server=db;Port=3306"
//! DefaultKey=
//! ```
//!
//! Keys are split from values on the first `=`, dots in keys become `:`, and a
//! value wrapped in one pair of double quotes is unwrapped.

use crate::domain::{ConfigError, ConfigKey, ConfigValue, ConfigurationMap, Result};
use crate::ports::ConfigParser;
use std::io::{self, BufRead, BufReader, Read};

/// Separates a key from its value.
pub const KEY_VALUE_DELIMITER: char = '=';

/// Starts a comment line.
pub const COMMENT_MARKER: char = '#';

const QUOTE: char = '"';
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Properties parser implementation.
///
/// # Examples
///
/// ```rust
/// use propcfg::adapters::PropertiesParser;
/// use propcfg::ports::ConfigParser;
///
/// let parser = PropertiesParser::new();
/// let content = "# connection\nDefaultConnection.Provider=\"SqlClient\"";
/// let result = parser.parse(content).unwrap();
/// assert_eq!(result.get("DefaultConnection:Provider").unwrap().as_str(), "SqlClient");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertiesParser;

impl PropertiesParser {
    /// Creates a new properties parser.
    pub fn new() -> Self {
        PropertiesParser
    }

    /// Parses a UTF-8 byte stream.
    ///
    /// The stream is read line by line. Invalid UTF-8 surfaces as
    /// [`ConfigError::IoError`] with kind `InvalidData`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use propcfg::adapters::PropertiesParser;
    ///
    /// let parser = PropertiesParser::new();
    /// let map = parser.parse_reader("Provider=MySql".as_bytes()).unwrap();
    /// assert_eq!(map.get("provider").unwrap().as_str(), "MySql");
    /// ```
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<ConfigurationMap> {
        parse_lines(BufReader::new(reader).lines())
    }
}

impl ConfigParser for PropertiesParser {
    fn parse(&self, content: &str) -> Result<ConfigurationMap> {
        parse_lines(content.lines().map(Ok::<_, io::Error>))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["properties"]
    }
}

/// Builds a map from a sequence of lines, failing on the first malformed one.
fn parse_lines<I, S>(lines: I) -> Result<ConfigurationMap>
where
    I: IntoIterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    let mut map = ConfigurationMap::new();
    let mut skipped = 0usize;

    for (index, line) in lines.into_iter().enumerate() {
        let line = line?;
        let mut line = line.as_ref();
        if index == 0 {
            line = line.strip_prefix(BYTE_ORDER_MARK).unwrap_or(line);
        }

        let Some((raw_key, raw_value)) = tokenize_line(index + 1, line)? else {
            skipped += 1;
            continue;
        };

        let key = normalize_key(raw_key);
        let value = ConfigValue::from(unquote_value(raw_value));
        if map.insert(key.clone(), value).is_some() {
            tracing::debug!(
                "Duplicate properties key '{}' at line {} overrides an earlier value",
                key,
                index + 1
            );
        }
    }

    tracing::debug!(
        "Parsed {} properties entries ({} blank or comment lines skipped)",
        map.len(),
        skipped
    );

    Ok(map)
}

/// Splits one line into its raw key and raw value.
///
/// Returns `Ok(None)` for blank lines and comment lines.
///
/// # Examples
///
/// ```rust
/// use propcfg::adapters::properties_parser::tokenize_line;
///
/// assert_eq!(tokenize_line(1, "  a.b = c=d ").unwrap(), Some(("a.b", " c=d")));
/// assert_eq!(tokenize_line(2, "   # comment").unwrap(), None);
/// assert!(tokenize_line(3, "no delimiter").is_err());
/// ```
pub fn tokenize_line(line_number: usize, line: &str) -> Result<Option<(&str, &str)>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER) {
        return Ok(None);
    }

    let (key, value) = trimmed.split_once(KEY_VALUE_DELIMITER).ok_or_else(|| {
        ConfigError::format_error(
            line_number,
            trimmed,
            format!("missing key/value delimiter '{}'", KEY_VALUE_DELIMITER),
        )
    })?;

    let key = key.trim();
    if key.is_empty() {
        return Err(ConfigError::format_error(
            line_number,
            trimmed,
            "empty key before delimiter",
        ));
    }

    Ok(Some((key, value)))
}

/// Rewrites a dot-delimited source key into a hierarchical key.
pub fn normalize_key(raw_key: &str) -> ConfigKey {
    ConfigKey::from_dotted(raw_key)
}

/// Trims a raw value and strips one enclosing pair of double quotes.
///
/// Unpaired quotes and quotes inside the value are kept as literal characters.
///
/// # Examples
///
/// ```rust
/// use propcfg::adapters::properties_parser::unquote_value;
///
/// assert_eq!(unquote_value(" \"SqlClient\" "), "SqlClient");
/// assert_eq!(unquote_value("\"SqlClient"), "\"SqlClient");
/// assert_eq!(unquote_value("Sql\"Client"), "Sql\"Client");
/// assert_eq!(unquote_value("   "), "");
/// ```
pub fn unquote_value(raw_value: &str) -> &str {
    let value = raw_value.trim();
    if value.len() >= 2 && value.starts_with(QUOTE) && value.ends_with(QUOTE) {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
