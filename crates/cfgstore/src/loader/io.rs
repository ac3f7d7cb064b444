//! IO helpers for reading config files from disk.

use crate::ConfigError;
use directories::UserDirs;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Read `path` and parse it as a JSON object.
///
/// Only IO failures are `Read` errors; bytes that are not valid UTF-8 JSON
/// are reported as `Parse`.
pub(super) fn read_object(path: &Path) -> Result<Map<String, Value>, ConfigError> {
    let contents = fs::read(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_object(&contents, path)
}

/// Parse JSON bytes whose top level must be an object.
pub(super) fn parse_object(
    contents: &[u8],
    path: &Path,
) -> Result<Map<String, Value>, ConfigError> {
    serde_json::from_slice(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Conventional search directories for an application's config file.
///
/// Returns the current directory, `~/.<app_name>` when a home directory is
/// known, and `/etc/<app_name>` on Unix, in that order.
pub fn default_search_paths(app_name: &str) -> Vec<String> {
    let mut paths = vec![".".to_string()];
    if let Some(dirs) = UserDirs::new() {
        let home = dirs.home_dir().join(format!(".{app_name}"));
        paths.push(home.to_string_lossy().into_owned());
    }
    #[cfg(unix)]
    paths.push(format!("/etc/{app_name}"));
    paths
}
