//! Error types for theme resolution and preference storage.

use std::path::PathBuf;

use thiserror::Error;

/// A theme identifier that is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme '{name}' (expected one of: minimalist, dark-sidebar, colorful-grid)")]
pub struct UnknownThemeError {
    /// The rejected value, verbatim.
    pub name: String,
}

impl UnknownThemeError {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Failure to write (or prepare) durable preference storage.
///
/// Reads never produce this error: an unreadable store is treated as empty.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file or its directory could not be written.
    #[error("failed to write preferences to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The preferences could not be encoded.
    #[error("failed to encode preferences: {0}")]
    Encode(#[from] toml::ser::Error),

    /// The store refuses writes (quota exceeded, access denied, read-only).
    #[error("preference storage rejected write: {0}")]
    Rejected(String),
}
