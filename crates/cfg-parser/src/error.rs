//! Error types for cfg-parser

use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;

/// Result type for cfg-parser operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] cfg_fs::Error),

    #[error("Parse error at {path}:{line}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

/// Per-field decode failures.
///
/// These never cross the `load()` boundary: the offending field is
/// dropped, the failure is logged, and parsing continues with the rest
/// of the section.
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    #[error("unsupported type tag `{tag}` in key `{key}`")]
    UnsupportedTag { key: String, tag: char },

    #[error("key `{key}` has no field name after its type tag")]
    EmptyName { key: String },

    #[error("invalid integer `{value}` for key `{key}`: {source}")]
    InvalidInt {
        key: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid float `{value}` for key `{key}`: {source}")]
    InvalidFloat {
        key: String,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}
