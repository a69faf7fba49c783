// SPDX-License-Identifier: MIT OR Apache-2.0

//! Helper utilities shared by the integration tests.

use propcfg::adapters::PropertiesConfigurationProvider;
use std::io::{Cursor, Write};
use std::sync::Once;

static TRACING: Once = Once::new();

/// Installs a test-friendly tracing subscriber once per test binary.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// Wraps text in a UTF-8 byte stream.
#[allow(dead_code)]
pub fn string_to_stream(text: &str) -> Cursor<Vec<u8>> {
    Cursor::new(text.as_bytes().to_vec())
}

/// Loads a fresh provider from `text`, panicking on failure.
#[allow(dead_code)]
pub fn load(text: &str) -> PropertiesConfigurationProvider {
    init_tracing();
    let mut provider = PropertiesConfigurationProvider::new();
    provider.load(string_to_stream(text)).unwrap();
    provider
}

/// Returns the value for `key`, asserting that it exists.
#[allow(dead_code)]
pub fn get_value<'a>(provider: &'a PropertiesConfigurationProvider, key: &str) -> &'a str {
    match provider.try_get(key) {
        Some(value) => value,
        None => panic!("expected key '{}' to be present", key),
    }
}

/// Creates a temporary properties file with the given content.
///
/// Returns a NamedTempFile that will be automatically deleted when dropped.
#[allow(dead_code)]
pub fn create_temp_properties(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".properties")
        .tempfile()
        .unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}
