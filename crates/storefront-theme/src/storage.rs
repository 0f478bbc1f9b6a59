//! Durable key/value storage for the selected theme.
//!
//! The store needs two operations from its persistence boundary: read an
//! optional string by key, and write a string best-effort. [`ThemeStorage`]
//! abstracts that boundary so tests can run against [`MemoryStorage`] while the
//! CLI persists to a small TOML file through [`FileStorage`].
//!
//! Reads never fail: a missing, unreadable or malformed store reads as empty.
//! Writes report failure, but the [`ThemeStore`](crate::ThemeStore) only logs
//! it and keeps its in-memory state.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::{debug, warn};

use crate::error::StorageError;

/// Storage key holding the selected theme identifier.
pub const THEME_KEY: &str = "app-theme";

/// File name used by [`FileStorage`] inside its directory.
pub const PREFERENCES_FILE: &str = "preferences.toml";

/// Abstraction over durable client-side storage.
pub trait ThemeStorage {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: ThemeStorage + ?Sized> ThemeStorage for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

impl<S: ThemeStorage + ?Sized> ThemeStorage for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// In-memory storage whose clones share one map.
///
/// Dropping a store and building a new one over a clone of the same
/// `MemoryStorage` simulates a process restart.
///
/// ```rust
/// use storefront_theme::{MemoryStorage, ThemeStorage};
///
/// let storage = MemoryStorage::new();
/// let handle = storage.clone();
/// storage.set("app-theme", "dark-sidebar").unwrap();
/// assert_eq!(handle.get("app-theme").as_deref(), Some("dark-sidebar"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage pre-seeded with one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        storage
            .entries
            .borrow_mut()
            .insert(key.into(), value.into());
        storage
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl ThemeStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage backed by a flat TOML table in `<dir>/preferences.toml`.
///
/// Other keys in the file are preserved on write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage rooted in `dir`. The directory is created on first write.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(PREFERENCES_FILE),
        }
    }

    /// Storage using an explicit file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> BTreeMap<String, String> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no preferences file yet");
                return BTreeMap::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read preferences");
                return BTreeMap::new();
            }
        };

        match toml::from_str(&content) {
            Ok(table) => table,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring malformed preferences");
                BTreeMap::new()
            }
        }
    }
}

impl ThemeStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.read_table().remove(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut table = self.read_table();
        table.insert(key.to_string(), value.to_string());
        let content = toml::to_string(&table)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&self.path, content).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), key, value, "saved preference");
        Ok(())
    }
}
