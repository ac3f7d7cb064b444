//! In-memory config store with typed, coercing accessors.

use crate::{ConfigError, ValidationReason};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Immutable key/value view over a parsed JSON config object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigStore {
    data: Map<String, Value>,
    source: Option<PathBuf>,
}

impl ConfigStore {
    /// Wrap an already-parsed JSON object.
    pub fn from_map(data: Map<String, Value>) -> Self {
        Self { data, source: None }
    }

    pub(crate) fn with_source(data: Map<String, Value>, source: PathBuf) -> Self {
        Self {
            data,
            source: Some(source),
        }
    }

    /// Path of the file this store was loaded from, if any.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Top-level keys in map order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// Raw value for `key`, without any type checks.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// String value for `key`, or `""` on any error.
    pub fn get_string(&self, key: &str) -> String {
        self.get_string_strict(key).unwrap_or_default()
    }

    /// String value for `key`; the value must be a JSON string.
    pub fn get_string_strict(&self, key: &str) -> Result<String, ConfigError> {
        match self.lookup(key)? {
            Value::String(value) => Ok(value.clone()),
            other => Err(type_mismatch(key, "a string", other)),
        }
    }

    /// Integer value for `key`, or `0` on any error.
    pub fn get_int(&self, key: &str) -> i64 {
        self.get_int_strict(key).unwrap_or_default()
    }

    /// Integer value for `key`.
    ///
    /// JSON numbers are truncated toward zero (saturating at the `i64`
    /// bounds) and strings are parsed as base-10 integers. Every other
    /// variant, and any string that does not parse, is a type mismatch.
    pub fn get_int_strict(&self, key: &str) -> Result<i64, ConfigError> {
        match self.lookup(key)? {
            Value::Number(number) => {
                if let Some(value) = number.as_i64() {
                    return Ok(value);
                }
                match number.as_f64() {
                    Some(value) => Ok(value as i64),
                    None => Err(type_mismatch(key, "an int", &Value::Number(number.clone()))),
                }
            }
            Value::String(text) => text
                .parse::<i64>()
                .map_err(|_| type_mismatch(key, "an int", &Value::String(text.clone()))),
            other @ (Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_)) => {
                Err(type_mismatch(key, "an int", other))
            }
        }
    }

    /// Boolean value for `key`, or `false` on any error.
    pub fn get_bool(&self, key: &str) -> bool {
        self.get_bool_strict(key).unwrap_or_default()
    }

    /// Boolean value for `key`; strings and numbers are not coerced.
    pub fn get_bool_strict(&self, key: &str) -> Result<bool, ConfigError> {
        match self.lookup(key)? {
            Value::Bool(value) => Ok(*value),
            other => Err(type_mismatch(key, "a boolean", other)),
        }
    }

    /// Ensure every key is present with a non-null, non-empty-string value.
    ///
    /// Stops at the first offending key.
    pub fn check_keys<S: AsRef<str>>(&self, keys: &[S]) -> Result<(), ConfigError> {
        for key in keys {
            let key = key.as_ref();
            let reason = match self.data.get(key) {
                None | Some(Value::Null) => Some(ValidationReason::MissingOrEmpty),
                Some(Value::String(text)) if text.is_empty() => {
                    Some(ValidationReason::EmptyString)
                }
                Some(_) => None,
            };
            if let Some(reason) = reason {
                return Err(ConfigError::Validation {
                    key: key.to_string(),
                    reason,
                });
            }
        }
        Ok(())
    }

    fn lookup(&self, key: &str) -> Result<&Value, ConfigError> {
        self.data.get(key).ok_or_else(|| ConfigError::KeyNotFound {
            key: key.to_string(),
        })
    }
}

/// Short name of a JSON variant for diagnostics.
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn type_mismatch(key: &str, expected: &'static str, found: &Value) -> ConfigError {
    ConfigError::TypeMismatch {
        key: key.to_string(),
        expected,
        found: value_kind(found),
    }
}
