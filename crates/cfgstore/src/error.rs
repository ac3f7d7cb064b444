//! Error types for config loading, lookup, and key validation.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by `ConfigStore` construction and strict accessors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file was absent from every search path.
    #[error("config file {file} not found in paths: {searched:?}")]
    NotFound { file: String, searched: Vec<String> },
    /// The first matching config file exists but could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid JSON or its top level is not an object.
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A strict accessor was called for a key that is not present.
    #[error("key '{key}' not found")]
    KeyNotFound { key: String },
    /// The value exists but cannot be read as the requested type.
    #[error("value for key '{key}' is not {expected} (found {found})")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
    /// A required key failed the presence check.
    #[error("key '{key}' {reason}")]
    Validation {
        key: String,
        reason: ValidationReason,
    },
}

/// Why a key failed `ConfigStore::check_keys`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    /// Key absent or mapped to `null`.
    MissingOrEmpty,
    /// Key mapped to `""`.
    EmptyString,
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationReason::MissingOrEmpty => f.write_str("does not exist or is empty"),
            ValidationReason::EmptyString => f.write_str("is an empty string"),
        }
    }
}
