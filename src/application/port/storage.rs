// SPDX-License-Identifier: MPL-2.0
//! Local storage port.
//!
//! Mirrors the browser `localStorage` contract: string keys, string values,
//! reads never fail (a broken store simply reports nothing).

use std::fmt;

/// The only keys the page persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StorageKey {
    FontSize,
    ContrastMode,
    CookieAccepted,
}

impl StorageKey {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StorageKey::FontSize => "fontSize",
            StorageKey::ContrastMode => "contrastMode",
            StorageKey::CookieAccepted => "cookieAccepted",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A write did not reach the backing store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageError(pub String);

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "storage write failed: {}", self.0)
    }
}

impl std::error::Error for StorageError {}

/// String key-value store for visitor preferences.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: StorageKey) -> Option<String>;

    /// Stores `value`. The in-memory view is updated even when persisting fails.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the value could not be persisted.
    fn set(&mut self, key: StorageKey, value: &str) -> Result<(), StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_match_local_storage_names() {
        assert_eq!(StorageKey::FontSize.as_str(), "fontSize");
        assert_eq!(StorageKey::ContrastMode.to_string(), "contrastMode");
        assert_eq!(StorageKey::CookieAccepted.as_str(), "cookieAccepted");
    }
}
