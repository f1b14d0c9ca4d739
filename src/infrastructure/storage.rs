// SPDX-License-Identifier: MPL-2.0
//! Local storage adapters.
//!
//! [`PersistedStore`] keeps the key-value map in `storage.cbor` inside the
//! data directory, rewriting the whole file on every `set`. The map is tiny
//! (three keys), so there is nothing to gain from partial writes.

use crate::app::paths;
use crate::application::port::{KeyValueStore, StorageError, StorageKey};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// Storage file name within the app data directory.
const STORAGE_FILE: &str = "storage.cbor";

/// Volatile store, used in tests and when no data directory exists.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: StorageKey, value: &str) -> Self {
        self.entries.insert(key.as_str().to_owned(), value.to_owned());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: StorageKey) -> Option<String> {
        self.entries.get(key.as_str()).cloned()
    }

    fn set(&mut self, key: StorageKey, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.as_str().to_owned(), value.to_owned());
        Ok(())
    }
}

/// Store backed by a CBOR file.
#[derive(Debug, Clone)]
pub struct PersistedStore {
    path: Option<PathBuf>,
    entries: BTreeMap<String, String>,
}

impl PersistedStore {
    /// Loads the store from the default data directory.
    ///
    /// Returns the store and an optional i18n warning key. A missing file
    /// is not a warning; an unreadable one yields an empty store.
    #[must_use]
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads the store from `base_dir`, or the default data directory if `None`.
    #[must_use]
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let path = paths::get_app_data_dir_with_override(base_dir).map(|mut dir| {
            dir.push(STORAGE_FILE);
            dir
        });

        let Some(file_path) = path.as_ref().filter(|p| p.exists()) else {
            return (Self::empty(path), None);
        };

        match fs::File::open(file_path) {
            Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
                Ok(entries) => (Self { path, entries }, None),
                Err(_) => (
                    Self::empty(path),
                    Some("notification-storage-parse-error".to_string()),
                ),
            },
            Err(_) => (
                Self::empty(path),
                Some("notification-storage-read-error".to_string()),
            ),
        }
    }

    fn empty(path: Option<PathBuf>) -> Self {
        Self {
            path,
            entries: BTreeMap::new(),
        }
    }

    /// Location of the backing file, if a data directory could be resolved.
    #[must_use]
    pub fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }

    fn save(&self) -> Result<(), StorageError> {
        let Some(path) = &self.path else {
            return Err(StorageError("no data directory".to_string()));
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError(e.to_string()))?;
        }
        let file = fs::File::create(path).map_err(|e| StorageError(e.to_string()))?;
        ciborium::into_writer(&self.entries, BufWriter::new(file))
            .map_err(|e| StorageError(e.to_string()))
    }
}

impl KeyValueStore for PersistedStore {
    fn get(&self, key: StorageKey) -> Option<String> {
        self.entries.get(key.as_str()).cloned()
    }

    fn set(&mut self, key: StorageKey, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.as_str().to_owned(), value.to_owned());
        self.save()
    }
}
