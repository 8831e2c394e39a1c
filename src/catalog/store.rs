//! JSON file catalog store with age-based expiry

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

#[cfg(test)]
use mockall::automock;

use tracing::debug;

use crate::catalog::error::StoreError;
use crate::catalog::types::VersionCatalog;

/// Trait for persisting and recalling a resolved catalog
///
/// The store is an injected dependency of the resolver so tests can
/// substitute an in-memory fake.
#[cfg_attr(test, automock)]
pub trait CatalogStore: Send + Sync {
    /// Returns the persisted catalog when it exists, parses, and is younger
    /// than the configured max age. Every miss, including an unreadable or
    /// corrupt file, is a plain None.
    fn load(&self) -> Option<VersionCatalog>;

    /// Serializes the catalog and overwrites the previous one.
    fn save(&self, catalog: &VersionCatalog) -> Result<(), StoreError>;
}

/// File-backed store keeping the catalog as pretty-printed JSON
pub struct FileStore {
    path: PathBuf,
    max_age: Duration,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>, max_age: Duration) -> Self {
        Self {
            path: path.into(),
            max_age,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogStore for FileStore {
    fn load(&self) -> Option<VersionCatalog> {
        let modified = fs::metadata(&self.path).and_then(|m| m.modified()).ok()?;

        // An mtime in the future counts as age zero
        let age = SystemTime::now()
            .duration_since(modified)
            .unwrap_or_default();
        if age > self.max_age {
            debug!("cache file {:?} is stale ({:?} old)", self.path, age);
            return None;
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!("cache file {:?} is unreadable: {}", self.path, e);
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(catalog) => Some(catalog),
            Err(e) => {
                debug!("cache file {:?} is corrupt: {}", self.path, e);
                None
            }
        }
    }

    fn save(&self, catalog: &VersionCatalog) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(catalog)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
