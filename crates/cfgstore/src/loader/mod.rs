//! Config file discovery and loading.
//!
//! Probes an ordered list of search directories for a named JSON file,
//! expanding environment variables in each directory first. The first
//! existing candidate is authoritative: read and parse failures there are
//! returned rather than falling through to later directories.

mod io;
mod utils;


pub use io::default_search_paths;

use crate::{ConfigError, ConfigStore};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Pseudo-path reported for configs parsed from in-memory text.
const MEMORY_SOURCE: &str = "<memory>";

impl ConfigStore {
    /// Locate `file_name` in `search_paths` and load the first match.
    pub fn load<S: AsRef<str>>(
        file_name: &str,
        search_paths: &[S],
    ) -> Result<Self, ConfigError> {
        let path = Self::resolve(file_name, search_paths)?;
        let data = io::read_object(&path).inspect_err(|err| {
            warn!("config candidate failed to load: {err}");
        })?;
        info!(
            "loaded config from {} (keys={})",
            path.display(),
            data.len()
        );
        Ok(Self::with_source(data, path))
    }

    /// Return the first existing `file_name` candidate across `search_paths`.
    pub fn resolve<S: AsRef<str>>(
        file_name: &str,
        search_paths: &[S],
    ) -> Result<PathBuf, ConfigError> {
        for raw in search_paths {
            let raw = raw.as_ref();
            let expanded = utils::expand_env(raw);
            let candidate = Path::new(&expanded).join(file_name);
            if candidate.exists() {
                debug!(
                    "config candidate found (search_path={raw}, path={})",
                    candidate.display()
                );
                return Ok(candidate);
            }
            debug!(
                "config candidate missing (search_path={raw}, path={})",
                candidate.display()
            );
        }
        Err(ConfigError::NotFound {
            file: file_name.to_string(),
            searched: search_paths
                .iter()
                .map(|path| path.as_ref().to_string())
                .collect(),
        })
    }

    /// Load a single config from an explicit path (no search).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("loading config from path: {}", path.display());
        let data = io::read_object(path)?;
        Ok(Self::with_source(data, path.to_path_buf()))
    }
}

impl FromStr for ConfigStore {
    type Err = ConfigError;

    /// Parse a config from raw JSON text; the store has no source path.
    fn from_str(contents: &str) -> Result<Self, Self::Err> {
        debug!("loading config from raw contents (len={})", contents.len());
        let data = io::parse_object(contents.as_bytes(), Path::new(MEMORY_SOURCE))?;
        Ok(Self::from_map(data))
    }
}
