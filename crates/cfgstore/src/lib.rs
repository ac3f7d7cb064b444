//! JSON config file discovery with typed, coercing accessors.
//!
//! `ConfigStore::load` searches an ordered list of directories for a named
//! JSON file, parses its top-level object, and serves string, integer, and
//! boolean lookups plus a required-key check.

mod error;
mod loader;
mod store;

/// Public error type returned by loading, lookup, and validation APIs.
pub use error::{ConfigError, ValidationReason};
/// Conventional search directories for an application.
pub use loader::default_search_paths;
/// Immutable config store.
pub use store::ConfigStore;
