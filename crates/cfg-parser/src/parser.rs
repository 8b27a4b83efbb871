//! Line parser for the tagged INI configuration format
//!
//! ```text
//! [section_one]
//! iInterval=30
//! fPrice=45.67
//! sEntryPointClass=MainMethanina
//! lProxyList=127.0.0.1:3456,127.0.0.1:2333
//! ```
//!
//! The first character of each key selects the value type; the rest of
//! the key is camelCase and is stored in underscore form.

use cfg_fs::NormalizedPath;

use crate::config::Config;
use crate::error::{Error, FieldError, Result};
use crate::naming::camel_to_underscore;
use crate::value::{TypeTag, Value};

/// Parse configuration text into a [`Config`].
///
/// `origin` is the path the content came from; it only appears in error
/// messages and log output.
///
/// Structural problems (a key/value line before any section header, a
/// non-blank line without `=`) are fatal. Per-field decode problems are
/// logged and the field is dropped, so one bad field does not abort the
/// rest of the file.
pub fn parse_str(content: &str, origin: &NormalizedPath) -> Result<Config> {
    let mut config = Config::default();
    let mut current: Option<String> = None;

    for (idx, raw_line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            // Header text between the brackets is stored as given.
            let name = &line[1..line.len() - 1];
            config.section_entry(name);
            current = Some(name.to_string());
            continue;
        }

        let Some((raw_key, raw_value)) = line.split_once('=') else {
            return Err(Error::Parse {
                path: origin.to_native(),
                line: line_no,
                message: format!("expected `key=value`, got `{line}`"),
            });
        };

        let Some(section_name) = current.clone() else {
            return Err(Error::Parse {
                path: origin.to_native(),
                line: line_no,
                message: "key/value pair before any section header".to_string(),
            });
        };

        match decode_field(raw_key.trim(), raw_value.trim()) {
            Ok((name, value)) => {
                config.section_entry(&section_name).insert(name, value);
            }
            Err(e) => {
                // One bad field must not abort the rest of the section.
                tracing::warn!("{origin}:{line_no}: skipping field: {e}");
            }
        }
    }

    Ok(config)
}

/// Split a key into type tag and display name, then decode the value.
fn decode_field(key: &str, raw_value: &str) -> std::result::Result<(String, Value), FieldError> {
    let tag_char = key.chars().next().ok_or_else(|| FieldError::EmptyName {
        key: key.to_string(),
    })?;
    let tag = TypeTag::from_char(tag_char).ok_or_else(|| FieldError::UnsupportedTag {
        key: key.to_string(),
        tag: tag_char,
    })?;

    let name = &key[tag_char.len_utf8()..];
    if name.is_empty() {
        return Err(FieldError::EmptyName {
            key: key.to_string(),
        });
    }

    let value = tag.decode(key, raw_value)?;
    Ok((camel_to_underscore(name), value))
}
